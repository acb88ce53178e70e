//! Route table and OpenAPI document.
//!
//! Handlers are registered through `OpenApiRouter` so every route also lands in the
//! generated OpenAPI document, which Swagger UI serves at `/swagger-ui`.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{classroom, event, participant, tag, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Course Manager API",
    description = "Users, classrooms, tags, scheduled events and participation"
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users))
        .routes(routes!(user::register_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::get_user_by_email))
        .routes(routes!(tag::get_tags, tag::create_tag))
        .routes(routes!(tag::get_tag, tag::update_tag, tag::delete_tag))
        .routes(routes!(classroom::get_classrooms, classroom::create_classroom))
        .routes(routes!(
            classroom::get_classroom,
            classroom::update_classroom,
            classroom::delete_classroom
        ))
        .routes(routes!(event::get_events))
        .routes(routes!(event::get_event))
        .routes(routes!(event::create_event))
        .routes(routes!(event::update_event))
        .routes(routes!(event::delete_event))
        .routes(routes!(event::search_events))
        .routes(routes!(event::get_organized_events))
        .routes(routes!(participant::get_participants))
        .routes(routes!(participant::join_event, participant::leave_event))
        .routes(routes!(participant::get_past_events))
        .routes(routes!(participant::get_future_events))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
