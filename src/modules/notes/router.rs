use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_note, delete_note, get_note, get_notes_by_paper, update_note};

pub fn init_notes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note))
        .route("/paper/{paper_id}", get(get_notes_by_paper))
        .route(
            "/{id}",
            get(get_note).patch(update_note).delete(delete_note),
        )
}
