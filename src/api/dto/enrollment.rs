//! Enrollment DTOs for API responses.
//!
//! Enrollments have no request body; the pair comes from the path.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Enrollment, EnrollmentKey};

/// Path parameters of `/enrollments/student/{studentId}/course/{courseId}`
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPath {
    pub student_id: i64,
    pub course_id: i64,
}

impl From<EnrollmentPath> for EnrollmentKey {
    fn from(path: EnrollmentPath) -> Self {
        EnrollmentKey::new(path.student_id, path.course_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "studentId": 1,
    "courseId": 1,
    "enrollmentDate": "2025-09-01T09:30:00"
}))]
pub struct EnrollmentResponse {
    pub student_id: i64,
    pub course_id: i64,
    /// Server-local time the enrollment was created
    #[schema(value_type = String, format = DateTime)]
    pub enrollment_date: DateTime,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            enrollment_date: enrollment.enrollment_date.to_jiff(),
        }
    }
}
