use std::fmt;

use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Natural identity of an enrollment: the (student, course) pair.
///
/// At most one enrollment exists per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnrollmentKey {
    pub student_id: i64,
    pub course_id: i64,
}

impl EnrollmentKey {
    pub fn new(student_id: i64, course_id: i64) -> Self {
        Self {
            student_id,
            course_id,
        }
    }
}

impl fmt::Display for EnrollmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student={}, course={}", self.student_id, self.course_id)
    }
}

/// Enrollment row as stored in the `enrollment` table
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::enrollment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Enrollment {
    pub student_id: i64,
    pub course_id: i64,
    pub enrollment_date: DateTime,
}

impl Enrollment {
    pub fn key(&self) -> EnrollmentKey {
        EnrollmentKey::new(self.student_id, self.course_id)
    }
}

/// NewEnrollment carries the server-assigned enrollment date
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::enrollment)]
pub struct NewEnrollment {
    pub student_id: i64,
    pub course_id: i64,
    pub enrollment_date: DateTime,
}

impl NewEnrollment {
    pub fn new(key: EnrollmentKey, enrollment_date: DateTime) -> Self {
        Self {
            student_id: key.student_id,
            course_id: key.course_id,
            enrollment_date,
        }
    }

    pub fn key(&self) -> EnrollmentKey {
        EnrollmentKey::new(self.student_id, self.course_id)
    }

    pub fn into_enrollment(self) -> Enrollment {
        Enrollment {
            student_id: self.student_id,
            course_id: self.course_id,
            enrollment_date: self.enrollment_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_order_by_student_then_course() {
        let mut keys = vec![
            EnrollmentKey::new(2, 1),
            EnrollmentKey::new(1, 9),
            EnrollmentKey::new(1, 3),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                EnrollmentKey::new(1, 3),
                EnrollmentKey::new(1, 9),
                EnrollmentKey::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_key_display() {
        assert_eq!(EnrollmentKey::new(4, 7).to_string(), "student=4, course=7");
    }
}
