use axum::http::{HeaderValue, Method, StatusCode};
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::attendance::router::init_attendance_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::internals::router::init_internals_router;
use crate::modules::notes::router::init_notes_router;
use crate::modules::papers::router::init_papers_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::modules::time_schedules::router::init_time_schedules_router;
use crate::state::AppState;

/// Catch-all for unmatched routes.
async fn fallback_404() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "404 Not Found", "details": "No paths found" })),
    )
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/auth", init_auth_router())
        .nest("/teachers", init_teachers_router(state.clone()))
        .nest("/students", init_students_router(state.clone()))
        .nest("/paper", init_papers_router(state.clone()))
        .nest("/notes", init_notes_router())
        .nest("/attendance", init_attendance_router())
        .nest("/internal", init_internals_router())
        .nest("/time_schedule", init_time_schedules_router())
        .fallback(fallback_404)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                // Credentials must be allowed for the session cookie to travel.
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
