use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{TimeSchedule, UpsertTimeScheduleRequest};

const SCHEDULE_COLUMNS: &str = "id, teacher_id, schedule, created_at, updated_at";

pub struct TimeScheduleService;

impl TimeScheduleService {
    /// One schedule per teacher; saving again replaces the grid.
    #[instrument(skip(db, dto))]
    pub async fn upsert_schedule(
        db: &PgPool,
        dto: UpsertTimeScheduleRequest,
    ) -> Result<TimeSchedule, AppError> {
        let schedule = sqlx::query_as::<_, TimeSchedule>(&format!(
            "INSERT INTO time_schedules (teacher_id, schedule)
             VALUES ($1, $2)
             ON CONFLICT (teacher_id)
             DO UPDATE SET schedule = EXCLUDED.schedule, updated_at = NOW()
             RETURNING {SCHEDULE_COLUMNS}"
        ))
        .bind(dto.teacher_id)
        .bind(&dto.schedule)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found(anyhow::anyhow!("Teacher not found"));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(schedule)
    }

    #[instrument(skip(db))]
    pub async fn get_schedule(db: &PgPool, teacher_id: Uuid) -> Result<TimeSchedule, AppError> {
        let schedule = sqlx::query_as::<_, TimeSchedule>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM time_schedules WHERE teacher_id = $1"
        ))
        .bind(teacher_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch time schedule")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No Time Schedule Found.")))?;

        Ok(schedule)
    }

    #[instrument(skip(db))]
    pub async fn delete_schedule(db: &PgPool, teacher_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM time_schedules WHERE teacher_id = $1")
            .bind(teacher_id)
            .execute(db)
            .await
            .context("Failed to delete time schedule")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Time Schedule Found."
            )));
        }

        Ok(())
    }
}
