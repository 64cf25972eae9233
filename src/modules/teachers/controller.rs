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

use super::model::{
    ApproveTeacherRequest, CreateTeacherRequest, Teacher, TeacherName, UpdateTeacherStatusRequest,
};
use super::service::TeacherService;

/// Register a new teacher. Public: anyone can register, but the record
/// stays unapproved until an HOD acts on it.
#[utoipa::path(
    post,
    path = "/teachers",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Teacher registered", body = MessageResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 409, description = "Duplicate username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let username = TeacherService::create_teacher(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("New Teacher {} Registered", username),
        }),
    ))
}

/// Get a teacher by id. The response never includes the password hash.
#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher record", body = Teacher),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, _session))]
pub async fn get_teacher(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get_teacher(&state.db, id).await?;
    Ok(Json(teacher))
}

/// List teacher names for a department.
#[utoipa::path(
    get,
    path = "/teachers/list/{department}",
    params(("department" = String, Path, description = "Department name")),
    responses(
        (status = 200, description = "Teacher names", body = [TeacherName]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No teachers in department", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, _session))]
pub async fn get_teacher_list(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(department): Path<String>,
) -> Result<Json<Vec<TeacherName>>, AppError> {
    let names = TeacherService::get_teacher_names(&state.db, &department).await?;
    Ok(Json(names))
}

/// List unapproved teachers for a department, for the HOD approval screen.
#[utoipa::path(
    get,
    path = "/teachers/unapproved/{department}",
    params(("department" = String, Path, description = "Department name")),
    responses(
        (status = 200, description = "Unapproved teachers", body = [Teacher]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "None found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, _session))]
pub async fn get_unapproved_teachers(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(department): Path<String>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::get_unapproved_teachers(&state.db, &department).await?;
    Ok(Json(teachers))
}

/// List teachers by workflow status (`pending` / `approved`).
#[utoipa::path(
    get,
    path = "/teachers/status/{status}",
    params(("status" = String, Path, description = "Workflow status")),
    responses(
        (status = 200, description = "Teachers with the given status", body = [Teacher]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "None found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, _session))]
pub async fn get_teachers_by_status(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(status): Path<String>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::get_teachers_by_status(&state.db, &status).await?;
    Ok(Json(teachers))
}

/// Approve a teacher by setting their role. HOD only (enforced by the
/// route layer).
#[utoipa::path(
    patch,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = ApproveTeacherRequest,
    responses(
        (status = 200, description = "Teacher approved", body = MessageResponse),
        (status = 400, description = "Invalid role", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 403, description = "Not an HOD", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn approve_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<ApproveTeacherRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let username = TeacherService::approve_teacher(&state.db, id, &dto.role).await?;

    Ok(Json(MessageResponse {
        message: format!("Teacher {} approved successfully", username),
    }))
}

/// Update a teacher's workflow status. HOD only.
#[utoipa::path(
    patch,
    path = "/teachers/{id}/status",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = UpdateTeacherStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Teacher),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 403, description = "Not an HOD", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherStatusRequest>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::update_teacher_status(&state.db, id, &dto.status).await?;
    Ok(Json(teacher))
}

/// Flip every pending teacher of a subject to approved. HOD only.
#[utoipa::path(
    patch,
    path = "/teachers/approve/{subject}",
    params(("subject" = String, Path, description = "Subject name")),
    responses(
        (status = 200, description = "Teachers approved", body = MessageResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 403, description = "Not an HOD", body = ErrorResponse),
        (status = 404, description = "No pending teachers for subject", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn approve_teachers_by_subject(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let count = TeacherService::approve_teachers_by_subject(&state.db, &subject).await?;

    Ok(Json(MessageResponse {
        message: format!("Approved {} teachers for the subject: {}", count, subject),
    }))
}

/// Delete a teacher record. HOD only; deletion is terminal.
#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 403, description = "Not an HOD", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let username = TeacherService::delete_teacher(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: format!("{} deleted", username),
    }))
}
