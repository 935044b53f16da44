//! Student CRUD request handlers.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::STUDENT_TAG;
use crate::api::dto::{ErrorResponse, StudentRequest, StudentResponse};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppResult;
use crate::state::AppState;

/// Routes:
/// - GET /        - List all students
/// - POST /       - Create a student
/// - GET /{id}    - Get student by ID
/// - PUT /{id}    - Replace name and birthday
/// - DELETE /{id} - Delete student and their enrollments
pub fn student_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_students, create_student))
        .routes(routes!(get_student, update_student, delete_student))
}

#[utoipa::path(
    get,
    path = "/",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students ordered by id", body = [StudentResponse])
    )
)]
async fn list_students(State(state): State<AppState>) -> AppResult<Json<Vec<StudentResponse>>> {
    let students = state.services.students.find_all().await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = STUDENT_TAG,
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student created", body = StudentResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
async fn create_student(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let student = state
        .services
        .students
        .create(payload.into_new_student())
        .await?;
    Ok(Json(StudentResponse::from(student)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = STUDENT_TAG,
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
async fn get_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<StudentResponse>> {
    let student = state.services.students.find_by_id(id).await?;
    Ok(Json(StudentResponse::from(student)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = STUDENT_TAG,
    params(("id" = i64, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<StudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let student = state
        .services
        .students
        .update(id, payload.into_update_student())
        .await?;
    Ok(Json(StudentResponse::from(student)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = STUDENT_TAG,
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.services.students.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
