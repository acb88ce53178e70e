use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UserError {
    /// No user exists with the given ID.
    #[error("User {0} not found")]
    NotFound(i32),

    /// Another user is already registered with this email address.
    #[error("Email {0} is already in use")]
    DuplicateEmail(String),

    /// The user exists but does not hold the organizer role.
    #[error("User {0} is not an organizer")]
    NotOrganizer(i32),

    /// The user still organizes events and cannot be removed.
    #[error("User {0} still organizes events")]
    HasOrganizedEvents(i32),
}

/// Converts user errors into HTTP responses.
///
/// - `NotFound` → 404 Not Found
/// - `DuplicateEmail` / `HasOrganizedEvents` → 409 Conflict
/// - `NotOrganizer` → 403 Forbidden
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateEmail(_) | Self::HasOrganizedEvents(_) => StatusCode::CONFLICT,
            Self::NotOrganizer(_) => StatusCode::FORBIDDEN,
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
