//! Event factory for creating test event entities.
//!
//! Inserts the event row and, when tags are given, the matching `event_tag` rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, organizer.id, classroom.id)
///     .interval(start, start + Duration::hours(1))
///     .max_participants(2)
///     .tags(vec![tag.id])
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::event::Model,
    tag_ids: Vec<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with defaults from the event fixture.
    ///
    /// Defaults:
    /// - name: `"Event {n}"`
    /// - interval: 2030-01-15 10:00 to 11:00 UTC
    /// - max_participants: `20`
    /// - no tags
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `organizer_id` - ID of the organizing user
    /// - `classroom_id` - ID of the booked classroom
    pub fn new(db: &'a DatabaseConnection, organizer_id: i32, classroom_id: i32) -> Self {
        let entity = fixture::event::entity_builder()
            .name(format!("Event {}", next_id()))
            .organizer_id(organizer_id)
            .classroom_id(classroom_id)
            .build();

        Self {
            db,
            entity,
            tag_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the booked interval `[start, end)`.
    pub fn interval(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.entity.start_datetime = start;
        self.entity.end_datetime = end;
        self
    }

    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.entity.max_participants = max_participants;
        self
    }

    pub fn min_age(mut self, min_age: Option<i32>) -> Self {
        self.entity.min_age = min_age;
        self
    }

    pub fn info(mut self, info: Option<String>) -> Self {
        self.entity.info = info;
        self
    }

    pub fn tags(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    /// Builds and inserts the event and its tag links.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            start_datetime: ActiveValue::Set(self.entity.start_datetime),
            end_datetime: ActiveValue::Set(self.entity.end_datetime),
            max_participants: ActiveValue::Set(self.entity.max_participants),
            min_age: ActiveValue::Set(self.entity.min_age),
            info: ActiveValue::Set(self.entity.info),
            organizer_id: ActiveValue::Set(self.entity.organizer_id),
            classroom_id: ActiveValue::Set(self.entity.classroom_id),
        }
        .insert(self.db)
        .await?;

        for tag_id in self.tag_ids {
            entity::event_tag::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }
}

/// Creates an event with default values for the given organizer and classroom.
pub async fn create_event(
    db: &DatabaseConnection,
    organizer_id: i32,
    classroom_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, organizer_id, classroom_id)
        .build()
        .await
}
