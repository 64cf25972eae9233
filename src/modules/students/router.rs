use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::role::require_hod;
use crate::state::AppState;

use super::controller::{create_student, delete_student, get_student, get_student_list};

pub fn init_students_router(state: AppState) -> Router<AppState> {
    let hod = middleware::from_fn_with_state(state, require_hod);

    Router::new()
        .route("/", post(create_student))
        .route("/list/{department}", get(get_student_list))
        .route(
            "/{id}",
            get(get_student).merge(delete(delete_student).layer(hod)),
        )
}
