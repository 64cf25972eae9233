use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A paper is a course offering: a subject taught in a department for one
/// semester, optionally assigned to a teacher.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Paper {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub semester: i32,
    pub teacher_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaperRequest {
    #[validate(length(min = 1, message = "All fields are required"))]
    pub title: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub department: String,
    #[validate(range(min = 1, max = 12, message = "Semester must be between 1 and 12"))]
    pub semester: i32,
    pub teacher_id: Option<Uuid>,
}
