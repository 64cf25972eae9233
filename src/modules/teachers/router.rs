use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::role::require_hod;
use crate::state::AppState;

use super::controller::{
    approve_teacher, approve_teachers_by_subject, create_teacher, delete_teacher, get_teacher,
    get_teacher_list, get_teachers_by_status, get_unapproved_teachers, update_teacher_status,
};

/// Teacher routes. Registration is public; reads require a session via the
/// `AuthSession` extractor; role/status mutations and deletion sit behind
/// the HOD layer.
pub fn init_teachers_router(state: AppState) -> Router<AppState> {
    let hod = middleware::from_fn_with_state(state, require_hod);

    Router::new()
        .route("/", post(create_teacher))
        .route("/list/{department}", get(get_teacher_list))
        .route("/unapproved/{department}", get(get_unapproved_teachers))
        .route("/status/{status}", get(get_teachers_by_status))
        .route(
            "/approve/{subject}",
            patch(approve_teachers_by_subject).layer(hod.clone()),
        )
        .route(
            "/{id}/status",
            patch(update_teacher_status).layer(hod.clone()),
        )
        .route(
            "/{id}",
            get(get_teacher).merge(
                patch(approve_teacher)
                    .delete(delete_teacher)
                    .layer(hod),
            ),
        )
}
