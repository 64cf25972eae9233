use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_attendance_by_slot, get_attendance_by_student, mark_attendance};

pub fn init_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(mark_attendance))
        .route("/student/{student_id}", get(get_attendance_by_student))
        .route("/{paper_id}/{date}/{hour}", get(get_attendance_by_slot))
}
