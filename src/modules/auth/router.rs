use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{logout, student_login, teacher_login};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login/teacher", post(teacher_login))
        .route("/login/student", post(student_login))
        .route("/logout", post(logout))
}
