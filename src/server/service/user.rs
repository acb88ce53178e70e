//! User service for business logic.
//!
//! This module provides the `UserService` for the user directory: registration with
//! a unique email, organizer-role lookup, partial updates and removal.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, user::UserRepository},
    error::{user::UserError, AppError},
    model::user::{RegisterUserParams, UpdateUserParams, User},
    service::ensure_present,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Checks that every text field is present and that no other user holds the same
    /// email before persisting.
    ///
    /// # Arguments
    /// - `params` - Registration fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated ID
    /// - `Err(AppError::BadRequest)` - A required field is empty
    /// - `Err(UserError::DuplicateEmail)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        ensure_present("firstname", &params.firstname)?;
        ensure_present("surname", &params.surname)?;
        ensure_present("email", &params.email)?;
        ensure_present("password", &params.password)?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(UserError::DuplicateEmail(params.email).into());
        }

        let user = repo.create(params).await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Gets a user that holds the organizer role.
    ///
    /// # Returns
    /// - `Ok(User)` - The organizer
    /// - `Err(UserError::NotFound)` - No user with that ID
    /// - `Err(UserError::NotOrganizer)` - The user is not an organizer
    pub async fn get_organizer(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        if !user.is_organizer {
            return Err(UserError::NotOrganizer(id).into());
        }

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_email(email).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial update to a user.
    ///
    /// Fields absent from `params` keep their stored value. A new email must not belong
    /// to a different user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - A provided text field is empty
    /// - `Err(UserError::NotFound)` - No user with that ID
    /// - `Err(UserError::DuplicateEmail)` - Email held by another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        for (field, value) in [
            ("firstname", &params.firstname),
            ("surname", &params.surname),
            ("email", &params.email),
            ("password", &params.password),
        ] {
            if let Some(value) = value {
                ensure_present(field, value)?;
            }
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(UserError::NotFound(id).into());
        }

        if let Some(email) = &params.email {
            if let Some(holder) = repo.find_by_email(email).await? {
                if holder.id != id {
                    return Err(UserError::DuplicateEmail(email.clone()).into());
                }
            }
        }

        let user = repo.update(id, params).await?.ok_or(UserError::NotFound(id))?;

        tracing::info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Deletes a user.
    ///
    /// Users who still organize events cannot be removed; their participation rows are
    /// removed with them.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(UserError::NotFound)` - No user with that ID
    /// - `Err(UserError::HasOrganizedEvents)` - The user still owns events
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(UserError::NotFound(id).into());
        }

        if EventRepository::new(self.db).count_by_organizer(id).await? > 0 {
            return Err(UserError::HasOrganizedEvents(id).into());
        }

        if !repo.delete(id).await? {
            return Err(UserError::NotFound(id).into());
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
