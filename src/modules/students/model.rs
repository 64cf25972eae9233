use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Student record as returned to clients, password hash excluded.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, message = "All fields are required"))]
    pub username: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub department: String,
    #[validate(range(min = 1, max = 6, message = "Year must be between 1 and 6"))]
    pub year: i32,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}
