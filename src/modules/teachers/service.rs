use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{ROLE_HOD, ROLE_TEACHER};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{CreateTeacherRequest, Teacher, TeacherName};

const TEACHER_COLUMNS: &str =
    "id, username, name, email, qualification, department, subject, role, status, \
     created_at, updated_at";

pub struct TeacherService;

impl TeacherService {
    /// Registers a new teacher. The record starts unapproved (`role = ''`,
    /// `status = 'pending'`) and cannot log in until an HOD approves it.
    #[instrument(skip(db, dto))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherRequest) -> Result<String, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        sqlx::query(
            "INSERT INTO teachers (username, name, email, qualification, department, subject, password)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&dto.username)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.qualification)
        .bind(&dto.department)
        .bind(&dto.subject)
        .bind(&hashed_password)
        .execute(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!("Duplicate Username"));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(dto.username)
    }

    #[instrument(skip(db))]
    pub async fn get_teacher(db: &PgPool, id: Uuid) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No Teacher Found.")))?;

        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn get_teacher_names(
        db: &PgPool,
        department: &str,
    ) -> Result<Vec<TeacherName>, AppError> {
        let names = sqlx::query_as::<_, TeacherName>(
            "SELECT id, name FROM teachers WHERE department = $1 ORDER BY name",
        )
        .bind(department)
        .fetch_all(db)
        .await
        .context("Failed to fetch teacher names")
        .map_err(AppError::database)?;

        if names.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No Teacher(s) Found")));
        }

        Ok(names)
    }

    #[instrument(skip(db))]
    pub async fn get_unapproved_teachers(
        db: &PgPool,
        department: &str,
    ) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers
             WHERE department = $1 AND role = '' ORDER BY created_at"
        ))
        .bind(department)
        .fetch_all(db)
        .await
        .context("Failed to fetch unapproved teachers")
        .map_err(AppError::database)?;

        if teachers.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Registered Teacher(s) Found."
            )));
        }

        Ok(teachers)
    }

    #[instrument(skip(db))]
    pub async fn get_teachers_by_status(
        db: &PgPool,
        status: &str,
    ) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE status = $1 ORDER BY created_at"
        ))
        .bind(status)
        .fetch_all(db)
        .await
        .context("Failed to fetch teachers by status")
        .map_err(AppError::database)?;

        if teachers.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Teachers Found for the given status"
            )));
        }

        Ok(teachers)
    }

    /// Sets the role of an unapproved teacher, unlocking login. The only
    /// role transitions are `'' -> 'teacher'` and `'' -> 'HOD'`; there is
    /// no demotion path.
    #[instrument(skip(db))]
    pub async fn approve_teacher(db: &PgPool, id: Uuid, role: &str) -> Result<String, AppError> {
        if role != ROLE_TEACHER && role != ROLE_HOD {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Role must be 'teacher' or 'HOD'"
            )));
        }

        let row: Option<(String,)> = sqlx::query_as(
            "UPDATE teachers SET role = $1, updated_at = NOW() WHERE id = $2 RETURNING username",
        )
        .bind(role)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to approve teacher")
        .map_err(AppError::database)?;

        row.map(|(username,)| username)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))
    }

    #[instrument(skip(db))]
    pub async fn update_teacher_status(
        db: &PgPool,
        id: Uuid,
        status: &str,
    ) -> Result<Teacher, AppError> {
        if status != "pending" && status != "approved" {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Status must be 'pending' or 'approved'"
            )));
        }

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "UPDATE teachers SET status = $1, updated_at = NOW() WHERE id = $2
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update teacher status")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        Ok(teacher)
    }

    /// Bulk status flip for every pending teacher of a subject. Returns how
    /// many rows changed; zero pending matches is a 404, not a silent
    /// success.
    #[instrument(skip(db))]
    pub async fn approve_teachers_by_subject(db: &PgPool, subject: &str) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE teachers SET status = 'approved', updated_at = NOW()
             WHERE subject = $1 AND status = 'pending'",
        )
        .bind(subject)
        .execute(db)
        .await
        .context("Failed to approve teachers by subject")
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No Teachers Found for the given subject"
            )));
        }

        Ok(result.rows_affected())
    }

    /// Deletes a teacher record. Terminal: the row is removed, not
    /// transitioned.
    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: Uuid) -> Result<String, AppError> {
        let row: Option<(String,)> =
            sqlx::query_as("DELETE FROM teachers WHERE id = $1 RETURNING username")
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to delete teacher")
                .map_err(AppError::database)?;

        row.map(|(username,)| username)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))
    }
}
