use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::session::SessionConfig;
use crate::middleware::role::ROLE_STUDENT;
use crate::utils::errors::AppError;
use crate::utils::password::verify_password;
use crate::utils::session::{create_session, destroy_session};

use super::model::{LoginRequest, SessionUser};

pub struct AuthService;

impl AuthService {
    /// Teacher login. Order of failures matters: unknown username is 404,
    /// an empty role is 418 before the password is even checked, and only
    /// then does a hash mismatch produce 401.
    #[instrument(skip(db, dto, session_config))]
    pub async fn login_teacher(
        db: &PgPool,
        dto: LoginRequest,
        session_config: &SessionConfig,
    ) -> Result<(Uuid, SessionUser), AppError> {
        #[derive(sqlx::FromRow)]
        struct TeacherRow {
            id: Uuid,
            name: String,
            department: String,
            password: String,
            role: String,
        }

        let teacher = sqlx::query_as::<_, TeacherRow>(
            "SELECT id, name, department, password, role FROM teachers WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        if teacher.role.is_empty() {
            return Err(AppError::not_approved(anyhow::anyhow!("User not Approved")));
        }

        if !verify_password(&dto.password, &teacher.password)? {
            return Err(AppError::unauthorized(anyhow::anyhow!("Incorrect Password")));
        }

        let user = SessionUser {
            id: teacher.id,
            name: teacher.name,
            role: teacher.role,
            department: Some(teacher.department),
        };

        let session_id = create_session(db, &user, session_config).await?;

        Ok((session_id, user))
    }

    /// Student login. Students have no approval gate; the snapshot role is
    /// always `student`.
    #[instrument(skip(db, dto, session_config))]
    pub async fn login_student(
        db: &PgPool,
        dto: LoginRequest,
        session_config: &SessionConfig,
    ) -> Result<(Uuid, SessionUser), AppError> {
        #[derive(sqlx::FromRow)]
        struct StudentRow {
            id: Uuid,
            name: String,
            department: String,
            password: String,
        }

        let student = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, department, password FROM students WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        if !verify_password(&dto.password, &student.password)? {
            return Err(AppError::unauthorized(anyhow::anyhow!("Incorrect Password")));
        }

        let user = SessionUser {
            id: student.id,
            name: student.name,
            role: ROLE_STUDENT.to_string(),
            department: Some(student.department),
        };

        let session_id = create_session(db, &user, session_config).await?;

        Ok((session_id, user))
    }

    /// Destroys a session by id. Unknown ids are a no-op so a stale cookie
    /// cannot make logout fail.
    #[instrument(skip(db))]
    pub async fn logout(db: &PgPool, session_id: Uuid) -> Result<(), AppError> {
        destroy_session(db, session_id)
            .await
            .map_err(|_| AppError::internal(anyhow::anyhow!("Failed to log out")))
    }
}
