use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{TimeSchedule, UpsertTimeScheduleRequest};
use super::service::TimeScheduleService;

#[utoipa::path(
    post,
    path = "/time_schedule",
    request_body = UpsertTimeScheduleRequest,
    responses(
        (status = 200, description = "Schedule saved", body = TimeSchedule),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Time Schedules"
)]
#[instrument(skip(state, _session, dto))]
pub async fn upsert_schedule(
    State(state): State<AppState>,
    _session: AuthSession,
    ValidatedJson(dto): ValidatedJson<UpsertTimeScheduleRequest>,
) -> Result<Json<TimeSchedule>, AppError> {
    let schedule = TimeScheduleService::upsert_schedule(&state.db, dto).await?;
    Ok(Json(schedule))
}

#[utoipa::path(
    get,
    path = "/time_schedule/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Schedule", body = TimeSchedule),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No schedule for teacher", body = ErrorResponse)
    ),
    tag = "Time Schedules"
)]
#[instrument(skip(state, _session))]
pub async fn get_schedule(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(teacher_id): Path<Uuid>,
) -> Result<Json<TimeSchedule>, AppError> {
    let schedule = TimeScheduleService::get_schedule(&state.db, teacher_id).await?;
    Ok(Json(schedule))
}

#[utoipa::path(
    delete,
    path = "/time_schedule/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Schedule deleted", body = MessageResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No schedule for teacher", body = ErrorResponse)
    ),
    tag = "Time Schedules"
)]
#[instrument(skip(state, _session))]
pub async fn delete_schedule(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(teacher_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    TimeScheduleService::delete_schedule(&state.db, teacher_id).await?;

    Ok(Json(MessageResponse {
        message: "Time Schedule deleted".to_string(),
    }))
}
