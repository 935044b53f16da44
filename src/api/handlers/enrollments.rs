//! Enrollment request handlers.
//!
//! An enrollment is addressed by its (student, course) pair; there is no
//! update.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ENROLLMENT_TAG;
use crate::api::dto::{EnrollmentPath, EnrollmentResponse, ErrorResponse};
use crate::api::extract::ApiPath;
use crate::error::AppResult;
use crate::state::AppState;

/// Routes:
/// - GET /                                          - List all enrollments
/// - POST /student/{studentId}/course/{courseId}    - Enroll
/// - GET /student/{studentId}/course/{courseId}     - Get enrollment
/// - DELETE /student/{studentId}/course/{courseId}  - Withdraw
pub fn enrollment_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_enrollments))
        .routes(routes!(create_enrollment, get_enrollment, delete_enrollment))
}

#[utoipa::path(
    get,
    path = "/",
    tag = ENROLLMENT_TAG,
    responses(
        (status = 200, description = "All enrollments ordered by student, then course", body = [EnrollmentResponse])
    )
)]
async fn list_enrollments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state.services.enrollments.find_all().await?;
    Ok(Json(
        enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/student/{studentId}/course/{courseId}",
    tag = ENROLLMENT_TAG,
    params(
        ("studentId" = i64, Path, description = "Student ID"),
        ("courseId" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollment created", body = EnrollmentResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse),
        (status = 409, description = "Student already enrolled", body = ErrorResponse)
    )
)]
async fn create_enrollment(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<EnrollmentPath>,
) -> AppResult<Json<EnrollmentResponse>> {
    let enrollment = state.services.enrollments.create(path.into()).await?;
    Ok(Json(EnrollmentResponse::from(enrollment)))
}

#[utoipa::path(
    get,
    path = "/student/{studentId}/course/{courseId}",
    tag = ENROLLMENT_TAG,
    params(
        ("studentId" = i64, Path, description = "Student ID"),
        ("courseId" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollment found", body = EnrollmentResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    )
)]
async fn get_enrollment(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<EnrollmentPath>,
) -> AppResult<Json<EnrollmentResponse>> {
    let enrollment = state.services.enrollments.find_by_id(path.into()).await?;
    Ok(Json(EnrollmentResponse::from(enrollment)))
}

#[utoipa::path(
    delete,
    path = "/student/{studentId}/course/{courseId}",
    tag = ENROLLMENT_TAG,
    params(
        ("studentId" = i64, Path, description = "Student ID"),
        ("courseId" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollment deleted"),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    )
)]
async fn delete_enrollment(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<EnrollmentPath>,
) -> AppResult<StatusCode> {
    state.services.enrollments.delete(path.into()).await?;
    Ok(StatusCode::OK)
}
