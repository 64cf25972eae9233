use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{InternalMark, UpsertInternalRequest};
use super::service::InternalService;

#[utoipa::path(
    post,
    path = "/internal",
    request_body = UpsertInternalRequest,
    responses(
        (status = 200, description = "Marks saved", body = InternalMark),
        (status = 400, description = "Invalid marks", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Paper or student not found", body = ErrorResponse)
    ),
    tag = "Internals"
)]
#[instrument(skip(state, _session, dto))]
pub async fn upsert_internal(
    State(state): State<AppState>,
    _session: AuthSession,
    ValidatedJson(dto): ValidatedJson<UpsertInternalRequest>,
) -> Result<Json<InternalMark>, AppError> {
    let mark = InternalService::upsert_internal(&state.db, dto).await?;
    Ok(Json(mark))
}

#[utoipa::path(
    get,
    path = "/internal/paper/{paper_id}",
    params(("paper_id" = Uuid, Path, description = "Paper ID")),
    responses(
        (status = 200, description = "Marks for the paper", body = [InternalMark]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No marks", body = ErrorResponse)
    ),
    tag = "Internals"
)]
#[instrument(skip(state, _session))]
pub async fn get_internals_by_paper(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(paper_id): Path<Uuid>,
) -> Result<Json<Vec<InternalMark>>, AppError> {
    let marks = InternalService::get_internals_by_paper(&state.db, paper_id).await?;
    Ok(Json(marks))
}

#[utoipa::path(
    get,
    path = "/internal/student/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Marks for the student", body = [InternalMark]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No marks", body = ErrorResponse)
    ),
    tag = "Internals"
)]
#[instrument(skip(state, _session))]
pub async fn get_internals_by_student(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<InternalMark>>, AppError> {
    let marks = InternalService::get_internals_by_student(&state.db, student_id).await?;
    Ok(Json(marks))
}
