//! User data repository for database operations.
//!
//! Provides the `UserRepository` for registering, querying, partially updating and
//! removing user records, converting entity models to domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::user::{RegisterUserParams, UpdateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Email uniqueness is enforced by the service before calling this; the unique
    /// index on `email` still rejects a concurrent duplicate with a `DbErr`.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: RegisterUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            firstname: ActiveValue::Set(params.firstname),
            surname: ActiveValue::Set(params.surname),
            age: ActiveValue::Set(params.age),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            is_organizer: ActiveValue::Set(params.is_organizer),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Returns all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update inside a transaction.
    ///
    /// Only fields present in `params` are written; every other column keeps its
    /// stored value.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(user) = entity::prelude::User::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(firstname) = params.firstname {
            active_model.firstname = ActiveValue::Set(firstname);
        }
        if let Some(surname) = params.surname {
            active_model.surname = ActiveValue::Set(surname);
        }
        if let Some(age) = params.age {
            active_model.age = ActiveValue::Set(age);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password) = params.password {
            active_model.password = ActiveValue::Set(password);
        }
        if let Some(is_organizer) = params.is_organizer {
            active_model.is_organizer = ActiveValue::Set(is_organizer);
        }

        let updated = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user by ID.
    ///
    /// Participation rows of the user are removed in the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EventParticipant::delete_many()
            .filter(entity::event_participant::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
