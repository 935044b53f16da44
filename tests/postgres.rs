//! Runs against a real PostgreSQL database. Skipped unless `DATABASE_URL`
//! is set; the schema is migrated on first use.

mod common;

use common::{TestApp, spawn_app};
use registrar::AppState;
use registrar::api::dto::{CourseResponse, EnrollmentResponse, StudentResponse};
use registrar::config::DatabaseConfig;
use registrar::db::{establish_async_connection_pool, run_pending_migrations};
use reqwest::StatusCode;
use serde_json::json;
use tokio::sync::OnceCell;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

async fn start_server() -> Option<TestApp> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skipping PostgreSQL tests");
        return None;
    };

    MIGRATED
        .get_or_init(|| async {
            run_pending_migrations(&url).await.unwrap();
        })
        .await;
    let config = DatabaseConfig {
        url,
        max_connections: 4,
        ..Default::default()
    };
    let pool = establish_async_connection_pool(&config).await.unwrap();
    Some(spawn_app(AppState::postgres(pool)).await.unwrap())
}

#[tokio::test]
async fn postgres_enrollment_lifecycle() {
    let Some(app) = start_server().await else {
        return;
    };

    let student: StudentResponse = app
        .client
        .post(app.url("/students"))
        .json(&json!({"name": "Isaac Newton", "birthday": "1643-01-04"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(student.birthday.to_string(), "1643-01-04");

    let course: CourseResponse = app
        .client
        .post(app.url("/courses"))
        .json(&json!({"name": "Physics", "available": true}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let path = format!("/enrollments/student/{}/course/{}", student.id, course.id);
    let res = app.client.post(app.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: EnrollmentResponse = res.json().await.unwrap();

    let res = app.client.post(app.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let all: Vec<EnrollmentResponse> = app
        .client
        .get(app.url("/enrollments"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ours: Vec<_> = all
        .into_iter()
        .filter(|e| e.student_id == student.id)
        .collect();
    assert_eq!(ours, vec![created]);

    // Deleting the course cascades to the enrollment.
    let res = app
        .client
        .delete(app.url(&format!("/courses/{}", course.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = app.client.get(app.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .client
        .delete(app.url(&format!("/students/{}", student.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn postgres_readiness() {
    let Some(app) = start_server().await else {
        return;
    };

    let res = app.client.get(app.url("/health/ready")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
