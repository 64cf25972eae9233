mod common;

use axum::http::StatusCode;
use common::{
    create_test_paper, create_test_session, create_test_student, create_test_teacher,
    json_request, setup_test_app, unique_username,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn teacher_session(pool: &PgPool) -> Uuid {
    let teacher = create_test_teacher(
        pool,
        &unique_username(),
        "pw123456",
        "CS",
        "teacher",
        "approved",
        None,
    )
    .await;
    create_test_session(pool, teacher.id, "teacher", Some("CS")).await
}

async fn hod_session(pool: &PgPool) -> Uuid {
    let hod =
        create_test_teacher(pool, &unique_username(), "pw123456", "CS", "HOD", "approved", None)
            .await;
    create_test_session(pool, hod.id, "HOD", Some("CS")).await
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_paper_in_a_department_is_409(pool: PgPool) {
    let sid = teacher_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let body = json!({ "title": "Algorithms", "department": "CS", "semester": 3 });

    let first = app
        .clone()
        .oneshot(json_request("POST", "/paper", Some(sid), Some(body.clone())))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(json_request("POST", "/paper", Some(sid), Some(body)))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    // Same title in a different department is fine.
    let other = app
        .oneshot(json_request(
            "POST",
            "/paper",
            Some(sid),
            Some(json!({ "title": "Algorithms", "department": "Math", "semester": 3 })),
        ))
        .await
        .unwrap();
    assert_eq!(other.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn papers_are_listed_by_department_and_teacher(pool: PgPool) {
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
    let sid = create_test_session(&pool, teacher.id, "teacher", Some("CS")).await;

    sqlx::query(
        "INSERT INTO papers (title, department, semester, teacher_id) VALUES ($1, 'CS', 1, $2)",
    )
    .bind("Compilers")
    .bind(teacher.id)
    .execute(&pool)
    .await
    .unwrap();
    create_test_paper(&pool, "Databases", "CS").await;

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .clone()
        .oneshot(json_request("GET", "/paper/department/CS", Some(sid), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/paper/teacher/{}", teacher.id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let papers = body_json(response).await;
    assert_eq!(papers.as_array().unwrap().len(), 1);
    assert_eq!(papers[0]["title"], "Compilers");

    let response = app
        .oneshot(json_request("GET", "/paper/department/History", Some(sid), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_paper_cascades_to_its_records(pool: PgPool) {
    let paper_id = create_test_paper(&pool, "Networks", "CS").await;
    let student = create_test_student(&pool, &unique_username(), "pw123456", "CS").await;

    sqlx::query("INSERT INTO notes (paper_id, title, body) VALUES ($1, 'Week 1', 'Intro')")
        .bind(paper_id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO attendance (paper_id, student_id, date, hour, present)
         VALUES ($1, $2, '2026-08-20', 1, true)",
    )
    .bind(paper_id)
    .bind(student.id)
    .execute(&pool)
    .await
    .unwrap();

    let sid = hod_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/paper/{}", paper_id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let notes: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes WHERE paper_id = $1")
        .bind(paper_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    let marks: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM attendance WHERE paper_id = $1")
        .bind(paper_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(notes.0, 0);
    assert_eq!(marks.0, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn note_for_a_missing_paper_is_404(pool: PgPool) {
    let sid = teacher_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/notes",
            Some(sid),
            Some(json!({
                "paper_id": Uuid::new_v4(),
                "title": "Week 1",
                "body": "Intro"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "No Paper Found.");
}

#[sqlx::test(migrations = "./migrations")]
async fn note_update_is_partial(pool: PgPool) {
    let paper_id = create_test_paper(&pool, "Networks", "CS").await;
    let sid = teacher_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/notes",
            Some(sid),
            Some(json!({ "paper_id": paper_id, "title": "Week 1", "body": "Intro" })),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let note_id = body_json(created).await["id"].as_str().unwrap().to_string();

    // Only the body changes; the title stays.
    let updated = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/notes/{}", note_id),
            Some(sid),
            Some(json!({ "body": "Revised intro" })),
        ))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);
    let note = body_json(updated).await;
    assert_eq!(note["title"], "Week 1");
    assert_eq!(note["body"], "Revised intro");

    let listed = app
        .oneshot(json_request(
            "GET",
            &format!("/notes/paper/{}", paper_id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(body_json(listed).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn marking_the_same_slot_twice_overwrites(pool: PgPool) {
    let paper_id = create_test_paper(&pool, "Networks", "CS").await;
    let student = create_test_student(&pool, &unique_username(), "pw123456", "CS").await;
    let sid = teacher_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let mark = |present: bool| {
        json!({
            "paper_id": paper_id,
            "student_id": student.id,
            "date": "2026-08-20",
            "hour": 3,
            "present": present
        })
    };

    let first = app
        .clone()
        .oneshot(json_request("POST", "/attendance", Some(sid), Some(mark(true))))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(json_request("POST", "/attendance", Some(sid), Some(mark(false))))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await["present"], false);

    // Still one row for the slot.
    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM attendance WHERE paper_id = $1 AND student_id = $2",
    )
    .bind(paper_id)
    .bind(student.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1);

    let by_slot = app
        .oneshot(json_request(
            "GET",
            &format!("/attendance/{}/2026-08-20/3", paper_id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(by_slot.status(), StatusCode::OK);
    let records = body_json(by_slot).await;
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["present"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn attendance_hour_out_of_range_is_400(pool: PgPool) {
    let paper_id = create_test_paper(&pool, "Networks", "CS").await;
    let student = create_test_student(&pool, &unique_username(), "pw123456", "CS").await;
    let sid = teacher_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/attendance",
            Some(sid),
            Some(json!({
                "paper_id": paper_id,
                "student_id": student.id,
                "date": "2026-08-20",
                "hour": 9,
                "present": true
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn internal_marks_upsert_per_student_and_paper(pool: PgPool) {
    let paper_id = create_test_paper(&pool, "Networks", "CS").await;
    let student = create_test_student(&pool, &unique_username(), "pw123456", "CS").await;
    let sid = teacher_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let marks = |test: i32| {
        json!({
            "paper_id": paper_id,
            "student_id": student.id,
            "test": test,
            "seminar": 70,
            "assignment": 80,
            "attendance": 90
        })
    };

    let first = app
        .clone()
        .oneshot(json_request("POST", "/internal", Some(sid), Some(marks(40))))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(json_request("POST", "/internal", Some(sid), Some(marks(65))))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await["test"], 65);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM internals")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);

    // Marks above 100 never reach the database.
    let invalid = app
        .clone()
        .oneshot(json_request("POST", "/internal", Some(sid), Some(marks(101))))
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let by_student = app
        .oneshot(json_request(
            "GET",
            &format!("/internal/student/{}", student.id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(by_student.status(), StatusCode::OK);
    assert_eq!(body_json(by_student).await[0]["test"], 65);
}

#[sqlx::test(migrations = "./migrations")]
async fn time_schedule_is_one_grid_per_teacher(pool: PgPool) {
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
    let sid = create_test_session(&pool, teacher.id, "teacher", Some("CS")).await;
    let app = setup_test_app(pool.clone()).await;

    let grid = |monday_first: &str| {
        json!({
            "teacher_id": teacher.id,
            "schedule": { "monday": [monday_first, "Databases"] }
        })
    };

    let first = app
        .clone()
        .oneshot(json_request("POST", "/time_schedule", Some(sid), Some(grid("Compilers"))))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    // Saving again replaces the grid instead of adding a second row.
    let second = app
        .clone()
        .oneshot(json_request("POST", "/time_schedule", Some(sid), Some(grid("Networks"))))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM time_schedules")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);

    let fetched = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/time_schedule/{}", teacher.id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(
        body_json(fetched).await["schedule"]["monday"][0],
        "Networks"
    );

    let deleted = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/time_schedule/{}", teacher.id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = app
        .oneshot(json_request(
            "GET",
            &format!("/time_schedule/{}", teacher.id),
            Some(sid),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn schedule_for_an_unknown_teacher_is_404(pool: PgPool) {
    let sid = teacher_session(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/time_schedule",
            Some(sid),
            Some(json!({
                "teacher_id": Uuid::new_v4(),
                "schedule": { "monday": [] }
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Teacher not found");
}
