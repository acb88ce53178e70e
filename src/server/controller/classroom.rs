use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        classroom::{ClassroomDto, SaveClassroomDto},
    },
    server::{error::AppError, service::classroom::ClassroomService, state::AppState},
};

/// Tag for grouping classroom endpoints in OpenAPI documentation
pub static CLASSROOM_TAG: &str = "classroom";

#[utoipa::path(
    get,
    path = "/api/classrooms",
    tag = CLASSROOM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved classrooms", body = Vec<ClassroomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classrooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let classrooms = ClassroomService::new(&state.db).get_all().await?;

    let classrooms: Vec<ClassroomDto> = classrooms
        .into_iter()
        .map(|classroom| classroom.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(classrooms)))
}

#[utoipa::path(
    post,
    path = "/api/classrooms",
    tag = CLASSROOM_TAG,
    request_body = SaveClassroomDto,
    responses(
        (status = 200, description = "Successfully created classroom", body = ClassroomDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_classroom(
    State(state): State<AppState>,
    Json(payload): Json<SaveClassroomDto>,
) -> Result<impl IntoResponse, AppError> {
    let classroom = ClassroomService::new(&state.db).create(payload.name).await?;

    Ok((StatusCode::OK, Json(classroom.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/classrooms/{id}",
    tag = CLASSROOM_TAG,
    params(
        ("id" = i32, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved classroom", body = ClassroomDto),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classroom(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let classroom = ClassroomService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(classroom.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/classrooms/{id}",
    tag = CLASSROOM_TAG,
    params(
        ("id" = i32, Path, description = "Classroom ID")
    ),
    request_body = SaveClassroomDto,
    responses(
        (status = 200, description = "Successfully updated classroom", body = ClassroomDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_classroom(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveClassroomDto>,
) -> Result<impl IntoResponse, AppError> {
    let classroom = ClassroomService::new(&state.db)
        .update(id, payload.name)
        .await?;

    Ok((StatusCode::OK, Json(classroom.into_dto())))
}

/// Delete a classroom.
///
/// # Returns
/// - `204 No Content` - Classroom deleted
/// - `404 Not Found` - No classroom with that ID
/// - `409 Conflict` - Events still book the classroom
#[utoipa::path(
    delete,
    path = "/api/classrooms/{id}",
    tag = CLASSROOM_TAG,
    params(
        ("id" = i32, Path, description = "Classroom ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted classroom"),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 409, description = "Classroom still booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_classroom(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ClassroomService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
