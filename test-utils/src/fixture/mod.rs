//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply default values
//! for the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//!
//! let organizer = fixture::user::entity_builder()
//!     .is_organizer(true)
//!     .build();
//! ```

pub mod event;
pub mod user;
