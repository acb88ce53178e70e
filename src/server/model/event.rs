//! Domain models for event scheduling.
//!
//! An `Event` is returned fully resolved: its organizer, classroom and tags are loaded
//! alongside the event row so callers never chase foreign keys themselves.

use chrono::{DateTime, Utc};

use crate::{
    model::event::{EventSummaryDto, SaveEventDto},
    server::model::{classroom::Classroom, tag::Tag, user::User},
};

/// Scheduled event booking a classroom over `[start_datetime, end_datetime)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub max_participants: i32,
    pub min_age: Option<i32>,
    pub info: Option<String>,
    /// Owning user; always holds the organizer role at the time of saving.
    pub organizer: User,
    pub classroom: Classroom,
    /// Attached tags ordered by ID.
    pub tags: Vec<Tag>,
}

impl Event {
    /// Assembles an event from its row and already-loaded relations.
    pub fn from_entity(
        entity: entity::event::Model,
        organizer: User,
        classroom: Classroom,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_datetime: entity.start_datetime,
            end_datetime: entity.end_datetime,
            max_participants: entity.max_participants,
            min_age: entity.min_age,
            info: entity.info,
            organizer,
            classroom,
            tags,
        }
    }

    /// Projects the event into its flattened summary.
    ///
    /// Pure projection: organizer reduced to ID and full name, classroom to ID and name,
    /// tags to their IDs.
    pub fn to_summary(&self) -> EventSummaryDto {
        EventSummaryDto {
            id: self.id,
            name: self.name.clone(),
            start_datetime: self.start_datetime,
            end_datetime: self.end_datetime,
            max_participants: self.max_participants,
            min_age: self.min_age,
            info: self.info.clone(),
            organizer_id: self.organizer.id,
            organizer_name: self.organizer.full_name(),
            classroom_id: self.classroom.id,
            classroom_name: self.classroom.name.clone(),
            tag_ids: self.tags.iter().map(|tag| tag.id).collect(),
        }
    }
}

/// Parameters for creating an event or overwriting every mutable field of one.
///
/// Organizer, classroom and tags are referenced by ID and resolved by the service.
#[derive(Debug, Clone)]
pub struct SaveEventParams {
    pub name: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub max_participants: i32,
    pub min_age: Option<i32>,
    pub info: Option<String>,
    pub organizer_id: i32,
    pub classroom_id: i32,
    pub tag_ids: Vec<i32>,
}

impl SaveEventParams {
    pub fn from_dto(dto: SaveEventDto) -> Self {
        Self {
            name: dto.name,
            start_datetime: dto.start_datetime,
            end_datetime: dto.end_datetime,
            max_participants: dto.max_participants,
            min_age: dto.min_age,
            info: dto.info,
            organizer_id: dto.organizer_id,
            classroom_id: dto.classroom_id,
            tag_ids: dto.tag_ids,
        }
    }
}

/// Optional filters for searching upcoming events.
#[derive(Debug, Clone, Default)]
pub struct SearchEventsParams {
    pub organizer_id: Option<i32>,
    pub classroom_id: Option<i32>,
    pub tag_id: Option<i32>,
    /// Drop events whose participant count has reached `max_participants`.
    pub exclude_full: bool,
}
