//! Data Transfer Objects for API requests and responses.
//!
//! JSON field names are camelCase except in the error and health bodies.

mod course;
mod enrollment;
mod error;
mod health;
mod student;

pub use course::{CourseRequest, CourseResponse};
pub use enrollment::{EnrollmentPath, EnrollmentResponse};
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use student::{StudentRequest, StudentResponse};
