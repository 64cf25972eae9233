use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{CreateStudentRequest, Student};

const STUDENT_COLUMNS: &str =
    "id, username, name, email, department, year, created_at, updated_at";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentRequest) -> Result<String, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        sqlx::query(
            "INSERT INTO students (username, name, email, department, year, password)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&dto.username)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.department)
        .bind(dto.year)
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
    pub async fn get_student(db: &PgPool, id: Uuid) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No Student Found.")))?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students_by_department(
        db: &PgPool,
        department: &str,
    ) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE department = $1 ORDER BY name"
        ))
        .bind(department)
        .fetch_all(db)
        .await
        .context("Failed to fetch students by department")
        .map_err(AppError::database)?;

        if students.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No Student(s) Found")));
        }

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: Uuid) -> Result<String, AppError> {
        let row: Option<(String,)> =
            sqlx::query_as("DELETE FROM students WHERE id = $1 RETURNING username")
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to delete student")
                .map_err(AppError::database)?;

        row.map(|(username,)| username)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }
}
