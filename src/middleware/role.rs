//! Role-based authorization on top of the session extractor.
//!
//! The client UI hides HOD-only actions from other roles, but that is a
//! convenience, not a trust boundary; these checks are what actually
//! enforce the invariant.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthSession;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const ROLE_HOD: &str = "HOD";
pub const ROLE_TEACHER: &str = "teacher";
pub const ROLE_STUDENT: &str = "student";

/// Route layer gating teacher approval, status mutation, and deletion to
/// the HOD role. Usage:
///
/// ```rust,ignore
/// router.route_layer(middleware::from_fn_with_state(state.clone(), require_hod))
/// ```
pub async fn require_hod(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(State(state), req, next, ROLE_HOD).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn require_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    expected: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let session = AuthSession::from_request_parts(&mut parts, &state).await?;

    check_role(&session, expected)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Manual role check for use inside handlers.
pub fn check_role(session: &AuthSession, expected: &str) -> Result<(), AppError> {
    if session.role() != expected {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. {} privileges required",
            expected
        )));
    }

    Ok(())
}
