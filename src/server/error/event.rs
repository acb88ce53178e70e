use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum EventError {
    /// No event exists with the given ID.
    #[error("Event {0} not found")]
    NotFound(i32),

    /// The requested interval overlaps another booking of the same classroom.
    #[error("Classroom {classroom_id} is not available at the given time")]
    SchedulingConflict {
        /// Classroom that is already booked
        classroom_id: i32,
    },

    /// The event already has as many participants as it allows.
    #[error("Event {0} is full")]
    Full(i32),

    /// The user is younger than the event's minimum age.
    #[error("Event {event_id} requires participants to be at least {min_age}")]
    BelowMinimumAge {
        /// Event being joined
        event_id: i32,
        /// Minimum age required by the event
        min_age: i32,
    },

    #[error("User {user_id} already participates in event {event_id}")]
    AlreadyParticipating { event_id: i32, user_id: i32 },

    #[error("User {user_id} does not participate in event {event_id}")]
    NotParticipating { event_id: i32, user_id: i32 },
}

/// Converts event errors into HTTP responses.
///
/// - `NotFound` / `NotParticipating` → 404 Not Found
/// - `SchedulingConflict` / `Full` / `AlreadyParticipating` → 409 Conflict
/// - `BelowMinimumAge` → 403 Forbidden
impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::NotParticipating { .. } => StatusCode::NOT_FOUND,
            Self::SchedulingConflict { .. } | Self::Full(_) | Self::AlreadyParticipating { .. } => {
                StatusCode::CONFLICT
            }
            Self::BelowMinimumAge { .. } => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
