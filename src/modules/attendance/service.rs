use anyhow::Context;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{AttendanceRecord, MarkAttendanceRequest};

const ATTENDANCE_COLUMNS: &str = "id, paper_id, student_id, date, hour, present, created_at";

pub struct AttendanceService;

impl AttendanceService {
    /// Upserts one mark for the `(paper, student, date, hour)` slot.
    #[instrument(skip(db, dto))]
    pub async fn mark_attendance(
        db: &PgPool,
        dto: MarkAttendanceRequest,
    ) -> Result<AttendanceRecord, AppError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(&format!(
            "INSERT INTO attendance (paper_id, student_id, date, hour, present)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (paper_id, student_id, date, hour)
             DO UPDATE SET present = EXCLUDED.present
             RETURNING {ATTENDANCE_COLUMNS}"
        ))
        .bind(dto.paper_id)
        .bind(dto.student_id)
        .bind(dto.date)
        .bind(dto.hour)
        .bind(dto.present)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found(anyhow::anyhow!("Paper or Student not found"));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(record)
    }

    #[instrument(skip(db))]
    pub async fn get_attendance_by_student(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance
             WHERE student_id = $1 ORDER BY date, hour"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch attendance by student")
        .map_err(AppError::database)?;

        if records.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Attendance Record(s) Found"
            )));
        }

        Ok(records)
    }

    #[instrument(skip(db))]
    pub async fn get_attendance_by_slot(
        db: &PgPool,
        paper_id: Uuid,
        date: NaiveDate,
        hour: i32,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance
             WHERE paper_id = $1 AND date = $2 AND hour = $3"
        ))
        .bind(paper_id)
        .bind(date)
        .bind(hour)
        .fetch_all(db)
        .await
        .context("Failed to fetch attendance by slot")
        .map_err(AppError::database)?;

        if records.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Attendance Record(s) Found"
            )));
        }

        Ok(records)
    }
}
