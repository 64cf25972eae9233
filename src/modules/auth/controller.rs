use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::session::SESSION_COOKIE;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, MessageResponse, SessionUser};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

fn session_cookie(session_id: Uuid, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Teacher login
#[utoipa::path(
    post,
    path = "/auth/login/teacher",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = SessionUser),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Incorrect password", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 418, description = "Teacher not yet approved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn teacher_login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUser>), AppError> {
    let (session_id, user) =
        AuthService::login_teacher(&state.db, dto, &state.session_config).await?;

    let cookie = session_cookie(session_id, state.session_config.secure_cookies);
    Ok((jar.add(cookie), Json(user)))
}

/// Student login
#[utoipa::path(
    post,
    path = "/auth/login/student",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = SessionUser),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Incorrect password", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn student_login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUser>), AppError> {
    let (session_id, user) =
        AuthService::login_student(&state.db, dto, &state.session_config).await?;

    let cookie = session_cookie(session_id, state.session_config.secure_cookies);
    Ok((jar.add(cookie), Json(user)))
}

/// Logout. Destroys the current session and clears the cookie. Calling it
/// without a session (or twice) still succeeds.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 500, description = "Session store failure", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(session_id) = Uuid::parse_str(cookie.value()) {
            AuthService::logout(&state.db, session_id).await?;
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    Ok((
        jar,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
