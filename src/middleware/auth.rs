use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::modules::auth::model::SessionUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::session::{SESSION_COOKIE, load_session};

/// Extractor that resolves the `sid` cookie to a stored session snapshot.
///
/// This is a pure boundary check: it only establishes that a valid,
/// non-expired session exists. Role checks are layered separately in
/// [`crate::middleware::role`].
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: Uuid,
    pub user: SessionUser,
}

impl AuthSession {
    pub fn role(&self) -> &str {
        &self.user.role
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar
            .get(SESSION_COOKIE)
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Unauthorized")))?;

        let session_id = Uuid::parse_str(cookie.value())
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Unauthorized")))?;

        let user = load_session(&state.db, session_id)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Unauthorized")))?;

        Ok(AuthSession { session_id, user })
    }
}
