//! Server-side session store.
//!
//! Sessions are rows in the `sessions` table keyed by an opaque UUID that
//! travels in the `sid` cookie. Each row holds a snapshot of the identity
//! captured at login time; it is never re-derived on later requests, so a
//! role change only takes effect at the next login.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::session::SessionConfig;
use crate::modules::auth::model::SessionUser;
use crate::utils::errors::AppError;

/// Name of the cookie carrying the opaque session id.
pub const SESSION_COOKIE: &str = "sid";

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    user_id: Uuid,
    name: String,
    role: String,
    department: Option<String>,
}

/// Creates a session row for the given identity snapshot and returns the
/// opaque session id to hand to the client.
pub async fn create_session(
    db: &PgPool,
    user: &SessionUser,
    config: &SessionConfig,
) -> Result<Uuid, AppError> {
    let expires_at = Utc::now() + Duration::hours(config.ttl_hours);

    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO sessions (user_id, name, role, department, expires_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.role)
    .bind(&user.department)
    .bind(expires_at)
    .fetch_one(db)
    .await
    .map_err(AppError::database)?;

    Ok(row.0)
}

/// Loads the identity snapshot for a session id, or `None` if the session
/// is unknown or expired. Expired rows are deleted on the way out.
pub async fn load_session(db: &PgPool, id: Uuid) -> Result<Option<SessionUser>, AppError> {
    let row = sqlx::query_as::<_, SessionRow>(
        "SELECT user_id, name, role, department FROM sessions
         WHERE id = $1 AND expires_at > NOW()",
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .map_err(AppError::database)?;

    if row.is_none() {
        // Lazy sweep: an expired row for this id is dead weight either way.
        sqlx::query("DELETE FROM sessions WHERE id = $1 AND expires_at <= NOW()")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;
    }

    Ok(row.map(|r| SessionUser {
        id: r.user_id,
        name: r.name,
        role: r.role,
        department: r.department,
    }))
}

/// Destroys a session. A missing row is not an error; logout is idempotent
/// in effect.
pub async fn destroy_session(db: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

    Ok(())
}
