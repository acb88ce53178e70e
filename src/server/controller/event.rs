use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        event::{EventSummaryDto, SaveEventDto},
    },
    server::{
        error::AppError,
        model::event::{Event, SaveEventParams, SearchEventsParams},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Optional filters for the event search; all present filters must match.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchEventsQuery {
    /// Only events owned by this organizer
    pub organizer_id: Option<i32>,
    /// Only events booked in this classroom
    pub classroom_id: Option<i32>,
    /// Only events carrying this tag
    pub tag_id: Option<i32>,
    /// Drop events that reached their participant limit
    #[serde(default)]
    pub exclude_full: bool,
}

impl SearchEventsQuery {
    fn into_params(self) -> SearchEventsParams {
        SearchEventsParams {
            organizer_id: self.organizer_id,
            classroom_id: self.classroom_id,
            tag_id: self.tag_id,
            exclude_full: self.exclude_full,
        }
    }
}

fn summaries(events: Vec<Event>) -> Vec<EventSummaryDto> {
    events.iter().map(Event::to_summary).collect()
}

/// List all events as summaries, ordered by start time.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(summaries(events))))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventSummaryDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(event.to_summary())))
}

/// Schedule a new event.
///
/// # Returns
/// - `200 OK` - The created event
/// - `400 Bad Request` - Empty event name
/// - `403 Forbidden` - Organizer lacks the organizer role
/// - `404 Not Found` - Organizer, classroom or a tag does not exist
/// - `409 Conflict` - Classroom already booked in the requested interval
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events/create",
    tag = EVENT_TAG,
    request_body = SaveEventDto,
    responses(
        (status = 200, description = "Successfully created event", body = EventSummaryDto),
        (status = 400, description = "Empty event name", body = ErrorDto),
        (status = 403, description = "User is not an organizer", body = ErrorDto),
        (status = 404, description = "Organizer, classroom or tag not found", body = ErrorDto),
        (status = 409, description = "Classroom not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<SaveEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .create(SaveEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.to_summary())))
}

/// Overwrite an existing event.
///
/// The event's own booking never counts as a conflict.
#[utoipa::path(
    put,
    path = "/api/events/{id}/update",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = SaveEventDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventSummaryDto),
        (status = 400, description = "Empty event name", body = ErrorDto),
        (status = 403, description = "User is not an organizer", body = ErrorDto),
        (status = 404, description = "Event, organizer, classroom or tag not found", body = ErrorDto),
        (status = 409, description = "Classroom not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .update(id, SaveEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.to_summary())))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}/delete",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Search upcoming events.
///
/// Only events that have not started yet are returned.
#[utoipa::path(
    get,
    path = "/api/events/search",
    tag = EVENT_TAG,
    params(SearchEventsQuery),
    responses(
        (status = 200, description = "Successfully searched events", body = Vec<EventSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_events(
    State(state): State<AppState>,
    Query(query): Query<SearchEventsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .search(query.into_params())
        .await?;

    Ok((StatusCode::OK, Json(summaries(events))))
}

#[utoipa::path(
    get,
    path = "/api/events/organizers/{organizer_id}/events",
    tag = EVENT_TAG,
    params(
        ("organizer_id" = i32, Path, description = "Organizer user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved organized events", body = Vec<EventSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organized_events(
    State(state): State<AppState>,
    Path(organizer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_organized_events(organizer_id)
        .await?;

    Ok((StatusCode::OK, Json(summaries(events))))
}
