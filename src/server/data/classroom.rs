use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};

use crate::server::model::classroom::Classroom;

pub struct ClassroomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassroomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new classroom with the given name
    pub async fn create(&self, name: String) -> Result<Classroom, DbErr> {
        let entity = entity::classroom::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Classroom::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Classroom>, DbErr> {
        let entity = entity::prelude::Classroom::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Classroom::from_entity))
    }

    /// Gets all classrooms ordered by name
    pub async fn get_all(&self) -> Result<Vec<Classroom>, DbErr> {
        let entities = entity::prelude::Classroom::find()
            .order_by_asc(entity::classroom::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Classroom::from_entity).collect())
    }

    /// Renames a classroom, returning None if it doesn't exist
    pub async fn update(&self, id: i32, name: String) -> Result<Option<Classroom>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(classroom) = entity::prelude::Classroom::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::classroom::ActiveModel = classroom.into();
        active_model.name = ActiveValue::Set(name);
        let updated = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(Classroom::from_entity(updated)))
    }

    /// Deletes a classroom, returning false if it doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Classroom::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
