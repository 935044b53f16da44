mod course;
mod enrollment;
mod student;

pub use course::{Course, NewCourse, UpdateCourse};
pub use enrollment::{Enrollment, EnrollmentKey, NewEnrollment};
pub use student::{NewStudent, Student, UpdateStudent};
