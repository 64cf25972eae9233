use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{InternalMark, UpsertInternalRequest};

const INTERNAL_COLUMNS: &str =
    "id, paper_id, student_id, test, seminar, assignment, attendance, updated_at";

pub struct InternalService;

impl InternalService {
    /// Upserts the marks row for a `(paper, student)` pair.
    #[instrument(skip(db, dto))]
    pub async fn upsert_internal(
        db: &PgPool,
        dto: UpsertInternalRequest,
    ) -> Result<InternalMark, AppError> {
        let mark = sqlx::query_as::<_, InternalMark>(&format!(
            "INSERT INTO internals (paper_id, student_id, test, seminar, assignment, attendance)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (paper_id, student_id)
             DO UPDATE SET test = EXCLUDED.test, seminar = EXCLUDED.seminar,
                           assignment = EXCLUDED.assignment, attendance = EXCLUDED.attendance,
                           updated_at = NOW()
             RETURNING {INTERNAL_COLUMNS}"
        ))
        .bind(dto.paper_id)
        .bind(dto.student_id)
        .bind(dto.test)
        .bind(dto.seminar)
        .bind(dto.assignment)
        .bind(dto.attendance)
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

        Ok(mark)
    }

    #[instrument(skip(db))]
    pub async fn get_internals_by_paper(
        db: &PgPool,
        paper_id: Uuid,
    ) -> Result<Vec<InternalMark>, AppError> {
        let marks = sqlx::query_as::<_, InternalMark>(&format!(
            "SELECT {INTERNAL_COLUMNS} FROM internals WHERE paper_id = $1"
        ))
        .bind(paper_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch internals by paper")
        .map_err(AppError::database)?;

        if marks.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Internal Mark(s) Found"
            )));
        }

        Ok(marks)
    }

    #[instrument(skip(db))]
    pub async fn get_internals_by_student(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<InternalMark>, AppError> {
        let marks = sqlx::query_as::<_, InternalMark>(&format!(
            "SELECT {INTERNAL_COLUMNS} FROM internals WHERE student_id = $1"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch internals by student")
        .map_err(AppError::database)?;

        if marks.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Internal Mark(s) Found"
            )));
        }

        Ok(marks)
    }
}
