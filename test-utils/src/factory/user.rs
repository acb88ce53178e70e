//! User factory for creating test user entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .firstname("Anna")
///     .age(17)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values from the user fixture.
    ///
    /// The email is made unique per factory as `user{n}@example.com`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::user::entity_builder()
            .email(format!("user{}@example.com", id))
            .build();

        Self { db, entity }
    }

    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.entity.firstname = firstname.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.entity.surname = surname.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.entity.age = age;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.entity.password = password.into();
        self
    }

    pub fn is_organizer(mut self, is_organizer: bool) -> Self {
        self.entity.is_organizer = is_organizer;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            firstname: ActiveValue::Set(self.entity.firstname),
            surname: ActiveValue::Set(self.entity.surname),
            age: ActiveValue::Set(self.entity.age),
            email: ActiveValue::Set(self.entity.email),
            password: ActiveValue::Set(self.entity.password),
            is_organizer: ActiveValue::Set(self.entity.is_organizer),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular (non-organizer) user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the organizer role.
pub async fn create_organizer(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).is_organizer(true).build().await
}
