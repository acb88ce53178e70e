use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::tag::Tag;

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tag with the given label
    pub async fn create(&self, label: String) -> Result<Tag, DbErr> {
        let entity = entity::tag::ActiveModel {
            label: ActiveValue::Set(label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Gets the tags matching the given IDs, ordered by ID
    ///
    /// IDs without a matching tag are skipped; callers compare lengths to detect them.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Gets all tags ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Relabels a tag, returning None if it doesn't exist
    pub async fn update(&self, id: i32, label: String) -> Result<Option<Tag>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(tag) = entity::prelude::Tag::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::tag::ActiveModel = tag.into();
        active_model.label = ActiveValue::Set(label);
        let updated = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(Tag::from_entity(updated)))
    }

    /// Deletes a tag and its event links, returning false if it doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::TagId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Tag::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
