use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        tag::{SaveTagDto, TagDto},
    },
    server::{error::AppError, service::tag::TagService, state::AppState},
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    let tags: Vec<TagDto> = tags.into_iter().map(|tag| tag.into_dto()).collect();

    Ok((StatusCode::OK, Json(tags)))
}

#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = SaveTagDto,
    responses(
        (status = 200, description = "Successfully created tag", body = TagDto),
        (status = 400, description = "Empty label", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<SaveTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).create(payload.label).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    request_body = SaveTagDto,
    responses(
        (status = 200, description = "Successfully updated tag", body = TagDto),
        (status = 400, description = "Empty label", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).update(id, payload.label).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag.
///
/// Unlike the other delete endpoints this one answers 200 with a message body.
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted tag", body = MessageDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TagService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Tag deleted".to_string(),
        }),
    ))
}
