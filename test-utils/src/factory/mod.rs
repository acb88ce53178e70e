//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let classroom = factory::classroom::create_classroom(&db).await?;
//!
//!     let (organizer, classroom, event) =
//!         factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let organizer = factory::user::UserFactory::new(&db)
//!     .email("organizer@example.com")
//!     .is_organizer(true)
//!     .build()
//!     .await?;
//! ```

pub mod classroom;
pub mod event;
pub mod event_participant;
pub mod helpers;
pub mod tag;
pub mod user;

pub use classroom::create_classroom;
pub use event::create_event;
pub use event_participant::create_participant;
pub use tag::create_tag;
pub use user::{create_organizer, create_user};
