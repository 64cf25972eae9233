use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreatePaperRequest, Paper};

const PAPER_COLUMNS: &str = "id, title, department, semester, teacher_id, created_at, updated_at";

pub struct PaperService;

impl PaperService {
    #[instrument(skip(db, dto))]
    pub async fn create_paper(db: &PgPool, dto: CreatePaperRequest) -> Result<Paper, AppError> {
        let paper = sqlx::query_as::<_, Paper>(&format!(
            "INSERT INTO papers (title, department, semester, teacher_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {PAPER_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.department)
        .bind(dto.semester)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!(
                        "Paper {} already exists in {}",
                        dto.title,
                        dto.department
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(paper)
    }

    #[instrument(skip(db))]
    pub async fn get_paper(db: &PgPool, id: Uuid) -> Result<Paper, AppError> {
        let paper = sqlx::query_as::<_, Paper>(&format!(
            "SELECT {PAPER_COLUMNS} FROM papers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch paper by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No Paper Found.")))?;

        Ok(paper)
    }

    #[instrument(skip(db))]
    pub async fn get_papers_by_department(
        db: &PgPool,
        department: &str,
    ) -> Result<Vec<Paper>, AppError> {
        let papers = sqlx::query_as::<_, Paper>(&format!(
            "SELECT {PAPER_COLUMNS} FROM papers WHERE department = $1 ORDER BY semester, title"
        ))
        .bind(department)
        .fetch_all(db)
        .await
        .context("Failed to fetch papers by department")
        .map_err(AppError::database)?;

        if papers.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No Paper(s) Found")));
        }

        Ok(papers)
    }

    #[instrument(skip(db))]
    pub async fn get_papers_by_teacher(
        db: &PgPool,
        teacher_id: Uuid,
    ) -> Result<Vec<Paper>, AppError> {
        let papers = sqlx::query_as::<_, Paper>(&format!(
            "SELECT {PAPER_COLUMNS} FROM papers WHERE teacher_id = $1 ORDER BY semester, title"
        ))
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch papers by teacher")
        .map_err(AppError::database)?;

        if papers.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No Paper(s) Found")));
        }

        Ok(papers)
    }

    #[instrument(skip(db))]
    pub async fn delete_paper(db: &PgPool, id: Uuid) -> Result<String, AppError> {
        let row: Option<(String,)> =
            sqlx::query_as("DELETE FROM papers WHERE id = $1 RETURNING title")
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to delete paper")
                .map_err(AppError::database)?;

        row.map(|(title,)| title)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Paper not found")))
    }
}
