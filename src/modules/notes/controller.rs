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

use super::model::{CreateNoteRequest, Note, UpdateNoteRequest};
use super::service::NoteService;

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Paper not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state, _session, dto))]
pub async fn create_note(
    State(state): State<AppState>,
    _session: AuthSession,
    ValidatedJson(dto): ValidatedJson<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let note = NoteService::create_note(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note record", body = Note),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state, _session))]
pub async fn get_note(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Note>, AppError> {
    let note = NoteService::get_note(&state.db, id).await?;
    Ok(Json(note))
}

#[utoipa::path(
    get,
    path = "/notes/paper/{paper_id}",
    params(("paper_id" = Uuid, Path, description = "Paper ID")),
    responses(
        (status = 200, description = "Notes for the paper", body = [Note]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No notes for paper", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state, _session))]
pub async fn get_notes_by_paper(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(paper_id): Path<Uuid>,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = NoteService::get_notes_by_paper(&state.db, paper_id).await?;
    Ok(Json(notes))
}

#[utoipa::path(
    patch,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = Note),
        (status = 400, description = "Empty fields", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state, _session, dto))]
pub async fn update_note(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateNoteRequest>,
) -> Result<Json<Note>, AppError> {
    let note = NoteService::update_note(&state.db, id, dto).await?;
    Ok(Json(note))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state, _session))]
pub async fn delete_note(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    NoteService::delete_note(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Note deleted".to_string(),
    }))
}
