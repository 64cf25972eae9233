use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::role::require_hod;
use crate::state::AppState;

use super::controller::{
    create_paper, delete_paper, get_paper, get_papers_by_department, get_papers_by_teacher,
};

pub fn init_papers_router(state: AppState) -> Router<AppState> {
    let hod = middleware::from_fn_with_state(state, require_hod);

    Router::new()
        .route("/", post(create_paper))
        .route("/department/{department}", get(get_papers_by_department))
        .route("/teacher/{teacher_id}", get(get_papers_by_teacher))
        .route(
            "/{id}",
            get(get_paper).merge(delete(delete_paper).layer(hod)),
        )
}
