//! Course CRUD request handlers.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::COURSE_TAG;
use crate::api::dto::{CourseRequest, CourseResponse, ErrorResponse};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppResult;
use crate::state::AppState;

/// Same shape as the student routes, over `name`/`available`.
pub fn course_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_courses, create_course))
        .routes(routes!(get_course, update_course, delete_course))
}

#[utoipa::path(
    get,
    path = "/",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses ordered by id", body = [CourseResponse])
    )
)]
async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<CourseResponse>>> {
    let courses = state.services.courses.find_all().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = COURSE_TAG,
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
async fn create_course(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    let course = state
        .services
        .courses
        .create(payload.into_new_course())
        .await?;
    Ok(Json(CourseResponse::from(course)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = COURSE_TAG,
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
async fn get_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<CourseResponse>> {
    let course = state.services.courses.find_by_id(id).await?;
    Ok(Json(CourseResponse::from(course)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = COURSE_TAG,
    params(("id" = i64, Path, description = "Course ID")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    let course = state
        .services
        .courses
        .update(id, payload.into_update_course())
        .await?;
    Ok(Json(CourseResponse::from(course)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = COURSE_TAG,
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.services.courses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
