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

use super::model::{CreateStudentRequest, Student};
use super::service::StudentService;

/// Register a new student. Public; students need no approval to log in.
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student registered", body = MessageResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 409, description = "Duplicate username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let username = StudentService::create_student(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("New Student {} Registered", username),
        }),
    ))
}

/// Get a student by id.
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student record", body = Student),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, _session))]
pub async fn get_student(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student(&state.db, id).await?;
    Ok(Json(student))
}

/// List students of a department.
#[utoipa::path(
    get,
    path = "/students/list/{department}",
    params(("department" = String, Path, description = "Department name")),
    responses(
        (status = 200, description = "Students", body = [Student]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No students in department", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, _session))]
pub async fn get_student_list(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(department): Path<String>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students_by_department(&state.db, &department).await?;
    Ok(Json(students))
}

/// Delete a student record. HOD only.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 403, description = "Not an HOD", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let username = StudentService::delete_student(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: format!("{} deleted", username),
    }))
}
