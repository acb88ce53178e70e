//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    label: String,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory labelled `"Tag {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            label: format!("Tag {}", next_id()),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            label: ActiveValue::Set(self.label),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
