//! Store trait definitions.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Course, Enrollment, EnrollmentKey, NewCourse, NewEnrollment, NewStudent, Student,
    UpdateCourse, UpdateStudent,
};

/// Persistence operations for students.
///
/// Every backend must implement this trait to be usable by the service layer.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a student and return it with its assigned id.
    async fn create(&self, new_student: NewStudent) -> AppResult<Student>;

    async fn find_by_id(&self, student_id: i64) -> AppResult<Option<Student>>;

    /// All students ordered by id.
    async fn list_all(&self) -> AppResult<Vec<Student>>;

    /// Overwrite the mutable fields; `None` when no row has the id.
    async fn update(&self, student_id: i64, changes: UpdateStudent) -> AppResult<Option<Student>>;

    /// Remove the student and its enrollments, returning affected student rows.
    async fn delete(&self, student_id: i64) -> AppResult<usize>;

    async fn exists(&self, student_id: i64) -> AppResult<bool>;
}

/// Persistence operations for courses.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn create(&self, new_course: NewCourse) -> AppResult<Course>;

    async fn find_by_id(&self, course_id: i64) -> AppResult<Option<Course>>;

    /// All courses ordered by id.
    async fn list_all(&self) -> AppResult<Vec<Course>>;

    async fn update(&self, course_id: i64, changes: UpdateCourse) -> AppResult<Option<Course>>;

    /// Remove the course and its enrollments, returning affected course rows.
    async fn delete(&self, course_id: i64) -> AppResult<usize>;

    async fn exists(&self, course_id: i64) -> AppResult<bool>;
}

/// Persistence operations for enrollments, keyed by (student, course).
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Insert an enrollment.
    ///
    /// Fails with `AppError::Conflict` when the pair is already enrolled and
    /// with `AppError::NotFound` when either side no longer exists.
    async fn create(&self, new_enrollment: NewEnrollment) -> AppResult<Enrollment>;

    async fn find_by_key(&self, key: EnrollmentKey) -> AppResult<Option<Enrollment>>;

    /// All enrollments ordered by student id, then course id.
    async fn list_all(&self) -> AppResult<Vec<Enrollment>>;

    async fn delete(&self, key: EnrollmentKey) -> AppResult<usize>;

    async fn exists(&self, key: EnrollmentKey) -> AppResult<bool>;
}
