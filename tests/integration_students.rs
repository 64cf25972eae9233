mod common;

use axum::http::StatusCode;
use common::{
    create_test_session, create_test_student, create_test_teacher, json_request, setup_test_app,
    unique_username,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn registration_body(username: &str) -> serde_json::Value {
    json!({
        "username": username,
        "name": "New Student",
        "email": format!("{}@test.com", username),
        "department": "CS",
        "year": 2,
        "password": "password123"
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn registration_is_public_and_hashes_the_password(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let username = unique_username();

    let response = app
        .oneshot(json_request(
            "POST",
            "/students",
            None,
            Some(registration_body(&username)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body["message"],
        format!("New Student {} Registered", username)
    );

    let row: (String,) = sqlx::query_as("SELECT password FROM students WHERE username = $1")
        .bind(&username)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(row.0, "password123");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_student_username_is_409(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let username = unique_username();

    let first = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/students",
            None,
            Some(registration_body(&username)),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(json_request(
            "POST",
            "/students",
            None,
            Some(registration_body(&username)),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = second.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Duplicate Username");
}

#[sqlx::test(migrations = "./migrations")]
async fn year_outside_range_is_400(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let mut body = registration_body(&unique_username());
    body["year"] = json!(9);

    let response = app
        .oneshot(json_request("POST", "/students", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn lookup_requires_a_session_and_hides_the_password(pool: PgPool) {
    let student = create_test_student(&pool, &unique_username(), "pw123456", "Physics").await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/students/{}", student.id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let sid = create_test_session(&pool, student.id, "student", Some("Physics")).await;
    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/students/{}", student.id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["username"], student.username);
    assert!(body.get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn department_listing_is_404_when_empty(pool: PgPool) {
    let student = create_test_student(&pool, &unique_username(), "pw123456", "Physics").await;
    let sid = create_test_session(&pool, student.id, "student", Some("Physics")).await;

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .clone()
        .oneshot(json_request("GET", "/students/list/Physics", Some(sid), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = app
        .oneshot(json_request("GET", "/students/list/History", Some(sid), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "No Student(s) Found");
}

#[sqlx::test(migrations = "./migrations")]
async fn only_hods_delete_students(pool: PgPool) {
    let student = create_test_student(&pool, &unique_username(), "pw123456", "CS").await;
    let teacher = create_test_teacher(
        &pool,
        &unique_username(),
        "pw123456",
        "CS",
        "teacher",
        "approved",
        None,
    )
    .await;
    let hod =
        create_test_teacher(&pool, &unique_username(), "pw123456", "CS", "HOD", "approved", None)
            .await;

    let app = setup_test_app(pool.clone()).await;

    let teacher_sid = create_test_session(&pool, teacher.id, "teacher", Some("CS")).await;
    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/students/{}", student.id),
            Some(teacher_sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let hod_sid = create_test_session(&pool, hod.id, "HOD", Some("CS")).await;
    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/students/{}", student.id),
            Some(hod_sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Deleting again reports the record missing.
    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/students/{}", student.id),
            Some(hod_sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Student not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_student_id_is_404(pool: PgPool) {
    let student = create_test_student(&pool, &unique_username(), "pw123456", "CS").await;
    let sid = create_test_session(&pool, student.id, "student", Some("CS")).await;

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/students/{}", Uuid::new_v4()),
            Some(sid),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "No Student Found.");
}
