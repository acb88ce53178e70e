use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flattened event projection returned by every event endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryDto {
    pub id: i32,
    pub name: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub max_participants: i32,
    pub min_age: Option<i32>,
    pub info: Option<String>,
    pub organizer_id: i32,
    /// Organizer first name and surname separated by a single space.
    pub organizer_name: String,
    pub classroom_id: i32,
    pub classroom_name: String,
    pub tag_ids: Vec<i32>,
}

/// Body for creating an event or replacing all of an event's fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveEventDto {
    pub name: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub max_participants: i32,
    pub min_age: Option<i32>,
    pub info: Option<String>,
    pub organizer_id: i32,
    pub classroom_id: i32,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}
