use axum::Router;
use axum::body::Body;
use axum::http::Request;
use campusdesk::config::cors::CorsConfig;
use campusdesk::config::session::SessionConfig;
use campusdesk::router::init_router;
use campusdesk::state::AppState;
use campusdesk::utils::password::hash_password;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_env(),
        session_config: SessionConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestTeacher {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub department: String,
    pub role: String,
}

/// Inserts a teacher directly. `role` of `""` means unapproved.
#[allow(dead_code, clippy::too_many_arguments)]
pub async fn create_test_teacher(
    pool: &PgPool,
    username: &str,
    password: &str,
    department: &str,
    role: &str,
    status: &str,
    subject: Option<&str>,
) -> TestTeacher {
    let hashed = hash_password(password).unwrap();

    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO teachers (username, name, email, qualification, department, subject, password, role, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id",
    )
    .bind(username)
    .bind("Test Teacher")
    .bind(format!("{}@test.com", username))
    .bind("MSc")
    .bind(department)
    .bind(subject)
    .bind(&hashed)
    .bind(role)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap();

    TestTeacher {
        id: row.0,
        username: username.to_string(),
        password: password.to_string(),
        department: department.to_string(),
        role: role.to_string(),
    }
}

#[allow(dead_code)]
pub struct TestStudent {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub department: String,
}

#[allow(dead_code)]
pub async fn create_test_student(
    pool: &PgPool,
    username: &str,
    password: &str,
    department: &str,
) -> TestStudent {
    let hashed = hash_password(password).unwrap();

    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO students (username, name, email, department, year, password)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(username)
    .bind("Test Student")
    .bind(format!("{}@test.com", username))
    .bind(department)
    .bind(2)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestStudent {
        id: row.0,
        username: username.to_string(),
        password: password.to_string(),
        department: department.to_string(),
    }
}

/// Inserts a session row directly, bypassing login.
#[allow(dead_code)]
pub async fn create_test_session(
    pool: &PgPool,
    user_id: Uuid,
    role: &str,
    department: Option<&str>,
) -> Uuid {
    create_test_session_expiring(pool, user_id, role, department, Utc::now() + Duration::hours(24))
        .await
}

/// Inserts a session row with an explicit expiry, for testing lifetime
/// behavior.
#[allow(dead_code)]
pub async fn create_test_session_expiring(
    pool: &PgPool,
    user_id: Uuid,
    role: &str,
    department: Option<&str>,
    expires_at: DateTime<Utc>,
) -> Uuid {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO sessions (user_id, name, role, department, expires_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(user_id)
    .bind("Test User")
    .bind(role)
    .bind(department)
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .unwrap();

    row.0
}

#[allow(dead_code)]
pub async fn create_test_paper(pool: &PgPool, title: &str, department: &str) -> Uuid {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO papers (title, department, semester) VALUES ($1, $2, 1) RETURNING id",
    )
    .bind(title)
    .bind(department)
    .fetch_one(pool)
    .await
    .unwrap();

    row.0
}

pub fn unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

/// JSON request with an optional session cookie.
pub fn json_request(
    method: &str,
    uri: &str,
    session_id: Option<Uuid>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(sid) = session_id {
        builder = builder.header("cookie", format!("sid={}", sid));
    }

    let body = match body {
        Some(json) => Body::from(serde_json::to_string(&json).unwrap()),
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}
