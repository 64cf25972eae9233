use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateNoteRequest, Note, UpdateNoteRequest};

const NOTE_COLUMNS: &str = "id, paper_id, title, body, created_at, updated_at";

pub struct NoteService;

impl NoteService {
    #[instrument(skip(db, dto))]
    pub async fn create_note(db: &PgPool, dto: CreateNoteRequest) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "INSERT INTO notes (paper_id, title, body)
             VALUES ($1, $2, $3)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(dto.paper_id)
        .bind(&dto.title)
        .bind(&dto.body)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found(anyhow::anyhow!("No Paper Found."));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn get_note(db: &PgPool, id: Uuid) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch note by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No Note Found.")))?;

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn get_notes_by_paper(db: &PgPool, paper_id: Uuid) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE paper_id = $1 ORDER BY created_at"
        ))
        .bind(paper_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch notes by paper")
        .map_err(AppError::database)?;

        if notes.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No Note(s) Found")));
        }

        Ok(notes)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_note(
        db: &PgPool,
        id: Uuid,
        dto: UpdateNoteRequest,
    ) -> Result<Note, AppError> {
        let existing = Self::get_note(db, id).await?;

        let title = dto.title.unwrap_or(existing.title);
        let body = dto.body.unwrap_or(existing.body);

        let note = sqlx::query_as::<_, Note>(&format!(
            "UPDATE notes SET title = $1, body = $2, updated_at = NOW() WHERE id = $3
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&title)
        .bind(&body)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update note")
        .map_err(AppError::database)?;

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn delete_note(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete note")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Note not found")));
        }

        Ok(())
    }
}
