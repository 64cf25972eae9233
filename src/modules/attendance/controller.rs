use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AttendanceRecord, MarkAttendanceRequest};
use super::service::AttendanceService;

#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 200, description = "Attendance marked", body = AttendanceRecord),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Paper or student not found", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state, _session, dto))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    _session: AuthSession,
    ValidatedJson(dto): ValidatedJson<MarkAttendanceRequest>,
) -> Result<Json<AttendanceRecord>, AppError> {
    let record = AttendanceService::mark_attendance(&state.db, dto).await?;
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/attendance/student/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Attendance records", body = [AttendanceRecord]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No records", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state, _session))]
pub async fn get_attendance_by_student(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records = AttendanceService::get_attendance_by_student(&state.db, student_id).await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/attendance/{paper_id}/{date}/{hour}",
    params(
        ("paper_id" = Uuid, Path, description = "Paper ID"),
        ("date" = String, Path, description = "Date (YYYY-MM-DD)"),
        ("hour" = i32, Path, description = "Hour slot")
    ),
    responses(
        (status = 200, description = "Attendance for the slot", body = [AttendanceRecord]),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No records", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state, _session))]
pub async fn get_attendance_by_slot(
    State(state): State<AppState>,
    _session: AuthSession,
    Path((paper_id, date, hour)): Path<(Uuid, NaiveDate, i32)>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records = AttendanceService::get_attendance_by_slot(&state.db, paper_id, date, hour).await?;
    Ok(Json(records))
}
