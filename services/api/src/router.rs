//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API and OpenAPI documentation.

use crate::{
    handlers,
    models::{CreateUserPayload, ErrorResponse, LeaderboardEntry, LessonResponse, User},
    state::AppState,
};

use axum::{Router, routing::get};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_user,
        handlers::login,
        handlers::leaderboard,
        handlers::get_lesson,
    ),
    components(
        schemas(User, CreateUserPayload, LeaderboardEntry, LessonResponse, ErrorResponse)
    ),
    tags(
        (name = "LearnAgent API", description = "Users, leaderboard and AI-generated lessons")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route(
            "/users",
            get(handlers::login).post(handlers::create_user),
        )
        .route("/leaderboard", get(handlers::leaderboard))
        .route("/lesson", get(handlers::get_lesson))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
