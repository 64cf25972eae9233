use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{delete_schedule, get_schedule, upsert_schedule};

pub fn init_time_schedules_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upsert_schedule))
        .route(
            "/{teacher_id}",
            get(get_schedule).delete(delete_schedule),
        )
}
