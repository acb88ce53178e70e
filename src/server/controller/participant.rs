use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, event::EventSummaryDto, user::UserDto},
    server::{
        error::AppError,
        model::event::Event,
        service::{event::EventService, participant::ParticipantService},
        state::AppState,
    },
};

/// Tag for grouping participation endpoints in OpenAPI documentation
pub static PARTICIPANT_TAG: &str = "participant";

#[utoipa::path(
    get,
    path = "/api/events/{id}/participants",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved participants", body = Vec<UserDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participants(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = ParticipantService::new(&state.db)
        .list_participants(id)
        .await?;

    let users: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Enroll a user in an event.
///
/// # Returns
/// - `204 No Content` - User enrolled
/// - `403 Forbidden` - User is below the event's minimum age
/// - `404 Not Found` - Event or user does not exist
/// - `409 Conflict` - Event full or user already enrolled
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events/{id}/participants/{user_id}",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully joined event"),
        (status = 403, description = "User below minimum age", body = ErrorDto),
        (status = 404, description = "Event or user not found", body = ErrorDto),
        (status = 409, description = "Event full or already joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_event(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    ParticipantService::new(&state.db).join(id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}/participants/{user_id}",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully left event"),
        (status = 404, description = "Event not found or user not participating", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_event(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    ParticipantService::new(&state.db).leave(id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List events the user joined that have already ended, most recent first.
#[utoipa::path(
    get,
    path = "/api/participants/{user_id}/past",
    tag = PARTICIPANT_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved past events", body = Vec<EventSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_past_events(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_past_participating_events(user_id)
        .await?;

    let events: Vec<EventSummaryDto> = events.iter().map(Event::to_summary).collect();

    Ok((StatusCode::OK, Json(events)))
}

/// List events the user joined that have not started yet, soonest first.
#[utoipa::path(
    get,
    path = "/api/participants/{user_id}/future",
    tag = PARTICIPANT_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved upcoming events", body = Vec<EventSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_future_events(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_future_participating_events(user_id)
        .await?;

    let events: Vec<EventSummaryDto> = events.iter().map(Event::to_summary).collect();

    Ok((StatusCode::OK, Json(events)))
}
