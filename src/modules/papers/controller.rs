use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreatePaperRequest, Paper};
use super::service::PaperService;

#[utoipa::path(
    post,
    path = "/paper",
    request_body = CreatePaperRequest,
    responses(
        (status = 201, description = "Paper created", body = Paper),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 409, description = "Paper already exists", body = ErrorResponse)
    ),
    tag = "Papers"
)]
#[instrument(skip(state, _session, dto))]
pub async fn create_paper(
    State(state): State<AppState>,
    _session: AuthSession,
    ValidatedJson(dto): ValidatedJson<CreatePaperRequest>,
) -> Result<(StatusCode, Json<Paper>), AppError> {
    let paper = PaperService::create_paper(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(paper)))
}

#[utoipa::path(
    get,
    path = "/paper/{id}",
    params(("id" = Uuid, Path, description = "Paper ID")),
    responses(
        (status = 200, description = "Paper record", body = Paper),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Paper not found", body = ErrorResponse)
    ),
    tag = "Papers"
)]
#[instrument(skip(state, _session))]
pub async fn get_paper(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Paper>, AppError> {
    let paper = PaperService::get_paper(&state.db, id).await?;
    Ok(Json(paper))
}

#[utoipa::path(
    get,
    path = "/paper/department/{department}",
    params(("department" = String, Path, description = "Department name")),
    responses(
        (status = 200, description = "Papers", body = [Paper]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No papers in department", body = ErrorResponse)
    ),
    tag = "Papers"
)]
#[instrument(skip(state, _session))]
pub async fn get_papers_by_department(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(department): Path<String>,
) -> Result<Json<Vec<Paper>>, AppError> {
    let papers = PaperService::get_papers_by_department(&state.db, &department).await?;
    Ok(Json(papers))
}

#[utoipa::path(
    get,
    path = "/paper/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Papers taught by the teacher", body = [Paper]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No papers for teacher", body = ErrorResponse)
    ),
    tag = "Papers"
)]
#[instrument(skip(state, _session))]
pub async fn get_papers_by_teacher(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(teacher_id): Path<Uuid>,
) -> Result<Json<Vec<Paper>>, AppError> {
    let papers = PaperService::get_papers_by_teacher(&state.db, teacher_id).await?;
    Ok(Json(papers))
}

/// Delete a paper. HOD only; notes and attendance cascade away with it.
#[utoipa::path(
    delete,
    path = "/paper/{id}",
    params(("id" = Uuid, Path, description = "Paper ID")),
    responses(
        (status = 200, description = "Paper deleted", body = MessageResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 403, description = "Not an HOD", body = ErrorResponse),
        (status = 404, description = "Paper not found", body = ErrorResponse)
    ),
    tag = "Papers"
)]
#[instrument(skip(state))]
pub async fn delete_paper(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let title = PaperService::delete_paper(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: format!("{} deleted", title),
    }))
}
