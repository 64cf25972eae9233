use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Internal assessment marks for one student in one paper.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct InternalMark {
    pub id: Uuid,
    pub paper_id: Uuid,
    pub student_id: Uuid,
    pub test: i32,
    pub seminar: i32,
    pub assignment: i32,
    pub attendance: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertInternalRequest {
    pub paper_id: Uuid,
    pub student_id: Uuid,
    #[validate(range(min = 0, max = 100, message = "Marks must be between 0 and 100"))]
    pub test: i32,
    #[validate(range(min = 0, max = 100, message = "Marks must be between 0 and 100"))]
    pub seminar: i32,
    #[validate(range(min = 0, max = 100, message = "Marks must be between 0 and 100"))]
    pub assignment: i32,
    #[validate(range(min = 0, max = 100, message = "Marks must be between 0 and 100"))]
    pub attendance: i32,
}
