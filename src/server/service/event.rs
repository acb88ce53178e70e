//! Event scheduling service.
//!
//! `EventService` owns the scheduling rules: an event's organizer must hold the
//! organizer role, its classroom and tags must exist, and no two events may book the
//! same classroom over overlapping intervals. An event being edited is never counted
//! as overlapping itself.
//!
//! The availability check and the following write are separate statements, so two
//! concurrent requests for the same slot can both pass the check.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::{event::EventError, AppError},
    model::event::{Event, SaveEventParams, SearchEventsParams},
    service::{
        classroom::ClassroomService, ensure_present, tag::TagService, user::UserService,
    },
};

/// Service providing business logic for event scheduling.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a new event.
    ///
    /// # Arguments
    /// - `params` - Event fields with organizer, classroom and tag IDs
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with relations loaded
    /// - `Err(UserError::NotFound | NotOrganizer)` - Organizer missing or lacking the role
    /// - `Err(AppError::NotFound)` - Classroom or a tag does not exist
    /// - `Err(EventError::SchedulingConflict)` - Classroom already booked in that interval
    /// - `Err(AppError::BadRequest)` - Empty event name
    pub async fn create(&self, params: SaveEventParams) -> Result<Event, AppError> {
        self.validate(&params).await?;

        if !self
            .is_classroom_available(
                params.classroom_id,
                params.start_datetime,
                params.end_datetime,
                None,
            )
            .await?
        {
            tracing::warn!(
                "Rejected event \"{}\": classroom {} is booked between {} and {}",
                params.name,
                params.classroom_id,
                params.start_datetime,
                params.end_datetime
            );

            return Err(EventError::SchedulingConflict {
                classroom_id: params.classroom_id,
            }
            .into());
        }

        let event = EventRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Scheduled event {} in classroom {}",
            event.id,
            event.classroom.id
        );

        Ok(event)
    }

    /// Overwrites every mutable field of an existing event.
    ///
    /// The event's own booking is excluded from the availability check, so saving it
    /// with unchanged times succeeds.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(EventError::NotFound)` - No event with that ID
    /// - Otherwise the same failures as `create`
    pub async fn update(&self, id: i32, params: SaveEventParams) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(EventError::NotFound(id).into());
        }

        self.validate(&params).await?;

        if !self
            .is_classroom_available(
                params.classroom_id,
                params.start_datetime,
                params.end_datetime,
                Some(id),
            )
            .await?
        {
            tracing::warn!(
                "Rejected update of event {}: classroom {} is booked between {} and {}",
                id,
                params.classroom_id,
                params.start_datetime,
                params.end_datetime
            );

            return Err(EventError::SchedulingConflict {
                classroom_id: params.classroom_id,
            }
            .into());
        }

        let event = repo.update(id, params).await?.ok_or(EventError::NotFound(id))?;

        tracing::info!("Updated event {}", event.id);

        Ok(event)
    }

    /// Deletes an event along with its tag links and participants.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db).delete(id).await? {
            return Err(EventError::NotFound(id).into());
        }

        tracing::info!("Deleted event {}", id);

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))?;

        Ok(event)
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_all().await?)
    }

    /// Gets all events owned by the given organizer.
    pub async fn get_organized_events(&self, organizer_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .get_by_organizer(organizer_id)
            .await?)
    }

    /// Gets events the user joined that have already ended.
    pub async fn get_past_participating_events(&self, user_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .get_past_by_participant(user_id, Utc::now())
            .await?)
    }

    /// Gets events the user joined that have not started yet.
    pub async fn get_future_participating_events(
        &self,
        user_id: i32,
    ) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .get_future_by_participant(user_id, Utc::now())
            .await?)
    }

    /// Searches upcoming events by optional organizer, classroom and tag.
    pub async fn search(&self, params: SearchEventsParams) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .search(params, Utc::now())
            .await?)
    }

    /// Checks whether a classroom is free over `[start, end)`.
    ///
    /// Returns true when no event in the classroom overlaps the interval, or when the
    /// only overlapping event is `exclude_event_id`.
    pub async fn is_classroom_available(
        &self,
        classroom_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_event_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let overlapping = EventRepository::new(self.db)
            .find_overlapping(classroom_id, start, end)
            .await?;

        Ok(overlapping
            .iter()
            .all(|event| Some(event.id) == exclude_event_id))
    }

    /// Checks the event name and resolves organizer, classroom and tags.
    async fn validate(&self, params: &SaveEventParams) -> Result<(), AppError> {
        ensure_present("name", &params.name)?;

        UserService::new(self.db)
            .get_organizer(params.organizer_id)
            .await?;
        ClassroomService::new(self.db)
            .get_by_id(params.classroom_id)
            .await?;
        TagService::new(self.db).resolve(&params.tag_ids).await?;

        Ok(())
    }
}
