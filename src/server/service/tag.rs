use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::tag::TagRepository, error::AppError, model::tag::Tag, service::ensure_present,
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tag with a non-empty label
    pub async fn create(&self, label: String) -> Result<Tag, AppError> {
        ensure_present("label", &label)?;

        Ok(TagRepository::new(self.db).create(label).await?)
    }

    /// Gets a tag by ID, failing with NotFound if absent
    pub async fn get_by_id(&self, id: i32) -> Result<Tag, AppError> {
        TagRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: i32, label: String) -> Result<Tag, AppError> {
        ensure_present("label", &label)?;

        TagRepository::new(self.db)
            .update(id, label)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", id)))
    }

    /// Deletes a tag, detaching it from every event
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TagRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Tag {} not found", id)));
        }

        Ok(())
    }

    /// Resolves a set of tag IDs, failing with NotFound naming the first unknown ID
    pub async fn resolve(&self, ids: &[i32]) -> Result<Vec<Tag>, AppError> {
        let requested: BTreeSet<i32> = ids.iter().copied().collect();
        let requested: Vec<i32> = requested.into_iter().collect();

        let tags = TagRepository::new(self.db).find_by_ids(&requested).await?;

        if let Some(missing) = requested
            .iter()
            .find(|id| !tags.iter().any(|tag| tag.id == **id))
        {
            return Err(AppError::NotFound(format!("Tag {} not found", missing)));
        }

        Ok(tags)
    }
}
