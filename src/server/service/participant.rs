//! Participation service.
//!
//! Enrolls users in events while enforcing capacity and minimum age.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, participant::ParticipantRepository, user::UserRepository},
    error::{event::EventError, user::UserError, AppError},
    model::{event::Event, user::User},
};

/// Service providing business logic for event participation.
pub struct ParticipantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a user in an event.
    ///
    /// # Returns
    /// - `Ok(())` - User enrolled
    /// - `Err(EventError::NotFound)` / `Err(UserError::NotFound)` - Missing event or user
    /// - `Err(EventError::AlreadyParticipating)` - User already enrolled
    /// - `Err(EventError::Full)` - Participant count reached `max_participants`
    /// - `Err(EventError::BelowMinimumAge)` - User younger than the event's minimum age
    pub async fn join(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        let event = self.get_event(event_id).await?;
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        let repo = ParticipantRepository::new(self.db);

        if repo.exists(event_id, user_id).await? {
            return Err(EventError::AlreadyParticipating { event_id, user_id }.into());
        }

        if repo.count_by_event(event_id).await? >= event.max_participants.max(0) as u64 {
            return Err(EventError::Full(event_id).into());
        }

        if let Some(min_age) = event.min_age {
            if user.age < min_age {
                return Err(EventError::BelowMinimumAge { event_id, min_age }.into());
            }
        }

        repo.add(event_id, user_id).await?;

        tracing::info!("User {} joined event {}", user_id, event_id);

        Ok(())
    }

    /// Removes a user from an event.
    pub async fn leave(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        self.get_event(event_id).await?;

        if !ParticipantRepository::new(self.db)
            .remove(event_id, user_id)
            .await?
        {
            return Err(EventError::NotParticipating { event_id, user_id }.into());
        }

        tracing::info!("User {} left event {}", user_id, event_id);

        Ok(())
    }

    /// Lists the users enrolled in an event, ordered by ID.
    pub async fn list_participants(&self, event_id: i32) -> Result<Vec<User>, AppError> {
        self.get_event(event_id).await?;

        Ok(ParticipantRepository::new(self.db)
            .get_participants(event_id)
            .await?)
    }

    async fn get_event(&self, event_id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        Ok(event)
    }
}
