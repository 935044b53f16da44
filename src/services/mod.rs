//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod course_service;
mod enrollment_service;
mod student_service;

pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use student_service::StudentService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since every store is behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub students: StudentService,
    pub courses: CourseService,
    pub enrollments: EnrollmentService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            students: StudentService::new(repos.students.clone()),
            courses: CourseService::new(repos.courses.clone()),
            enrollments: EnrollmentService::new(repos.enrollments, repos.students, repos.courses),
        }
    }
}
