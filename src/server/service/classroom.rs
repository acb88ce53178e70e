use sea_orm::DatabaseConnection;

use crate::server::{
    data::{classroom::ClassroomRepository, event::EventRepository},
    error::AppError,
    model::classroom::Classroom,
    service::ensure_present,
};

pub struct ClassroomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassroomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new classroom with a non-empty name
    pub async fn create(&self, name: String) -> Result<Classroom, AppError> {
        ensure_present("name", &name)?;

        Ok(ClassroomRepository::new(self.db).create(name).await?)
    }

    /// Gets a classroom by ID, failing with NotFound if absent
    pub async fn get_by_id(&self, id: i32) -> Result<Classroom, AppError> {
        ClassroomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Classroom {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<Classroom>, AppError> {
        Ok(ClassroomRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: i32, name: String) -> Result<Classroom, AppError> {
        ensure_present("name", &name)?;

        ClassroomRepository::new(self.db)
            .update(id, name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Classroom {} not found", id)))
    }

    /// Deletes a classroom
    ///
    /// A classroom still booked by any event is kept and reported as a conflict.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClassroomRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Classroom {} not found", id)));
        }

        let bookings = EventRepository::new(self.db).count_by_classroom(id).await?;
        if bookings > 0 {
            return Err(AppError::Conflict(format!(
                "Classroom {} is still booked by {} event(s)",
                id, bookings
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
