use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Teacher record as returned to clients. The password hash is never
/// selected into this type.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub qualification: String,
    pub department: String,
    pub subject: Option<String>,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Name-only projection for dropdown lists.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct TeacherName {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherRequest {
    #[validate(length(min = 1, message = "All fields are required"))]
    pub username: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub qualification: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub department: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub subject: Option<String>,
}

/// Approval payload. The role is a single string; `teacher` and `HOD` are
/// the only values that unlock login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ApproveTeacherRequest {
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}
