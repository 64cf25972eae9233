use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A teacher's weekly timetable, stored as a day/hour grid. The grid shape
/// is owned by the client; the server treats it as an opaque document.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct TimeSchedule {
    pub id: Uuid,
    pub teacher_id: Uuid,
    #[schema(value_type = Object)]
    pub schedule: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertTimeScheduleRequest {
    pub teacher_id: Uuid,
    #[schema(value_type = Object)]
    pub schedule: serde_json::Value,
}
