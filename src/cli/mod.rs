//! CLI commands that bypass the HTTP surface.
//!
//! The first HOD cannot be approved through the API (approval itself
//! requires an HOD session), so it is seeded directly.

use sqlx::PgPool;

use crate::middleware::role::ROLE_HOD;
use crate::utils::password::hash_password;

/// Inserts a pre-approved HOD teacher.
pub async fn create_hod(
    pool: &PgPool,
    username: &str,
    name: &str,
    email: &str,
    department: &str,
    password: &str,
) -> anyhow::Result<()> {
    let hashed = hash_password(password).map_err(|e| e.error)?;

    sqlx::query(
        "INSERT INTO teachers (username, name, email, qualification, department, password, role, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, 'approved')",
    )
    .bind(username)
    .bind(name)
    .bind(email)
    .bind("N/A")
    .bind(department)
    .bind(&hashed)
    .bind(ROLE_HOD)
    .execute(pool)
    .await?;

    Ok(())
}
