use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_internals_by_paper, get_internals_by_student, upsert_internal};

pub fn init_internals_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upsert_internal))
        .route("/paper/{paper_id}", get(get_internals_by_paper))
        .route("/student/{student_id}", get(get_internals_by_student))
}
