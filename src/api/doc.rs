use utoipa::OpenApi;

pub const STUDENT_TAG: &str = "Students";
pub const COURSE_TAG: &str = "Courses";
pub const ENROLLMENT_TAG: &str = "Enrollments";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar",
        description = "Student, course and enrollment records",
    ),
    components(
        schemas(crate::api::dto::ErrorResponse)
    ),
    tags(
        (name = STUDENT_TAG, description = "Student management endpoints"),
        (name = COURSE_TAG, description = "Course management endpoints"),
        (name = ENROLLMENT_TAG, description = "Enrollment of students in courses"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
