//! Enrollment service for business logic operations.
//!
//! Creating an enrollment validates both referenced records and the
//! uniqueness of the pair before writing. The store repeats the last two
//! checks atomically, so a concurrent writer still gets the same errors.

use std::sync::Arc;

use jiff::Zoned;
use jiff_diesel::ToDiesel;

use crate::error::{AppError, AppResult};
use crate::models::{Enrollment, EnrollmentKey, NewEnrollment};
use crate::repositories::{CourseStore, EnrollmentStore, StudentStore};

/// Enrollment service for handling enrollment-related business logic.
///
/// Holds the student and course stores for existence checks.
#[derive(Clone)]
pub struct EnrollmentService {
    repo: Arc<dyn EnrollmentStore>,
    students: Arc<dyn StudentStore>,
    courses: Arc<dyn CourseStore>,
}

impl EnrollmentService {
    pub fn new(
        repo: Arc<dyn EnrollmentStore>,
        students: Arc<dyn StudentStore>,
        courses: Arc<dyn CourseStore>,
    ) -> Self {
        Self {
            repo,
            students,
            courses,
        }
    }

    /// Enrolls a student in a course.
    ///
    /// Checks run in order: student exists, course exists, pair not yet
    /// enrolled. The enrollment date is the current local server time.
    ///
    /// # Arguments
    /// * `key` - The (student, course) pair
    ///
    /// # Returns
    /// The created enrollment, `NotFound` for a missing student or course,
    /// or `Conflict` if the pair is already enrolled
    pub async fn create(&self, key: EnrollmentKey) -> AppResult<Enrollment> {
        if !self.students.exists(key.student_id).await? {
            return Err(AppError::student_not_found(key.student_id));
        }
        if !self.courses.exists(key.course_id).await? {
            return Err(AppError::course_not_found(key.course_id));
        }
        if self.repo.exists(key).await? {
            return Err(AppError::already_enrolled(key));
        }

        let enrollment_date = Zoned::now().datetime().to_diesel();
        let created = self
            .repo
            .create(NewEnrollment::new(key, enrollment_date))
            .await?;

        tracing::info!(
            student_id = key.student_id,
            course_id = key.course_id,
            "Enrollment created"
        );
        Ok(created)
    }

    /// Gets the enrollment for a pair, or `NotFound` error.
    pub async fn find_by_id(&self, key: EnrollmentKey) -> AppResult<Enrollment> {
        self.repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::enrollment_not_found(key))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Enrollment>> {
        self.repo.list_all().await
    }

    /// Removes the enrollment for a pair, or `NotFound` error.
    pub async fn delete(&self, key: EnrollmentKey) -> AppResult<()> {
        if self.repo.delete(key).await? == 0 {
            return Err(AppError::enrollment_not_found(key));
        }
        tracing::info!(
            student_id = key.student_id,
            course_id = key.course_id,
            "Enrollment deleted"
        );
        Ok(())
    }
}
