//! Classroom factory for creating test classroom entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classrooms.
pub struct ClassroomFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> ClassroomFactory<'a> {
    /// Creates a new ClassroomFactory named `"Room {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Room {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the classroom entity into the database.
    pub async fn build(self) -> Result<entity::classroom::Model, DbErr> {
        entity::classroom::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a classroom with default values.
pub async fn create_classroom(db: &DatabaseConnection) -> Result<entity::classroom::Model, DbErr> {
    ClassroomFactory::new(db).build().await
}
