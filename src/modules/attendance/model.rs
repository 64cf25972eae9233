use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One attendance mark: a student's presence for one hour of one paper on
/// one date. Marking the same slot twice overwrites the earlier value.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub paper_id: Uuid,
    pub student_id: Uuid,
    pub date: NaiveDate,
    pub hour: i32,
    pub present: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MarkAttendanceRequest {
    pub paper_id: Uuid,
    pub student_id: Uuid,
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 8, message = "Hour must be between 1 and 8"))]
    pub hour: i32,
    pub present: bool,
}
