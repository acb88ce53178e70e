//! Event fixtures for creating in-memory test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::event;

/// Default test event name.
pub const DEFAULT_NAME: &str = "Test Event";

/// Default maximum number of participants.
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 20;

/// Default start time, a fixed instant so fixtures compare equal across runs.
pub fn default_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 15, 10, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates an event entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Event"`
/// - start_datetime: 2030-01-15 10:00 UTC
/// - end_datetime: one hour after start
/// - max_participants: `20`
/// - min_age: `None`
/// - info: `None`
/// - organizer_id: `1`
/// - classroom_id: `1`
pub fn entity() -> event::Model {
    entity_builder().build()
}

/// Creates an event entity builder for customization.
pub fn entity_builder() -> EventEntityBuilder {
    EventEntityBuilder::default()
}

/// Builder for creating customized event entity models.
pub struct EventEntityBuilder {
    entity: event::Model,
}

impl Default for EventEntityBuilder {
    fn default() -> Self {
        let start = default_start();
        Self {
            entity: event::Model {
                id: 1,
                name: DEFAULT_NAME.to_string(),
                start_datetime: start,
                end_datetime: start + Duration::hours(1),
                max_participants: DEFAULT_MAX_PARTICIPANTS,
                min_age: None,
                info: None,
                organizer_id: 1,
                classroom_id: 1,
            },
        }
    }
}

impl EventEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets both ends of the booked interval.
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

    pub fn organizer_id(mut self, organizer_id: i32) -> Self {
        self.entity.organizer_id = organizer_id;
        self
    }

    pub fn classroom_id(mut self, classroom_id: i32) -> Self {
        self.entity.classroom_id = classroom_id;
        self
    }

    /// Builds the event entity model.
    pub fn build(self) -> event::Model {
        self.entity
    }
}
