//! In-process store implementing every store trait over one lock.
//!
//! Reference checks, the duplicate-pair check and cascading deletes all run
//! under the same mutex, so they observe a consistent snapshot.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{
    Course, Enrollment, EnrollmentKey, NewCourse, NewEnrollment, NewStudent, Student,
    UpdateCourse, UpdateStudent,
};
use crate::repositories::{CourseStore, EnrollmentStore, StudentStore};

#[derive(Default)]
struct Tables {
    students: BTreeMap<i64, Student>,
    courses: BTreeMap<i64, Course>,
    enrollments: BTreeMap<EnrollmentKey, Enrollment>,
    last_student_id: i64,
    last_course_id: i64,
}

/// Memory-backed store used for tests and database-less runs.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("memory store lock poisoned: {}", e),
        })
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn create(&self, new_student: NewStudent) -> AppResult<Student> {
        let mut tables = self.lock()?;
        tables.last_student_id += 1;
        let created = new_student.into_student(tables.last_student_id);
        tables.students.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, student_id: i64) -> AppResult<Option<Student>> {
        Ok(self.lock()?.students.get(&student_id).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Student>> {
        Ok(self.lock()?.students.values().cloned().collect())
    }

    async fn update(&self, student_id: i64, changes: UpdateStudent) -> AppResult<Option<Student>> {
        let mut tables = self.lock()?;
        Ok(tables.students.get_mut(&student_id).map(|student| {
            student.name = changes.name;
            student.birthday = changes.birthday;
            student.clone()
        }))
    }

    async fn delete(&self, student_id: i64) -> AppResult<usize> {
        let mut tables = self.lock()?;
        if tables.students.remove(&student_id).is_none() {
            return Ok(0);
        }
        tables.enrollments.retain(|key, _| key.student_id != student_id);
        Ok(1)
    }

    async fn exists(&self, student_id: i64) -> AppResult<bool> {
        Ok(self.lock()?.students.contains_key(&student_id))
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn create(&self, new_course: NewCourse) -> AppResult<Course> {
        let mut tables = self.lock()?;
        tables.last_course_id += 1;
        let created = new_course.into_course(tables.last_course_id);
        tables.courses.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, course_id: i64) -> AppResult<Option<Course>> {
        Ok(self.lock()?.courses.get(&course_id).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Course>> {
        Ok(self.lock()?.courses.values().cloned().collect())
    }

    async fn update(&self, course_id: i64, changes: UpdateCourse) -> AppResult<Option<Course>> {
        let mut tables = self.lock()?;
        Ok(tables.courses.get_mut(&course_id).map(|course| {
            course.name = changes.name;
            course.available = changes.available;
            course.clone()
        }))
    }

    async fn delete(&self, course_id: i64) -> AppResult<usize> {
        let mut tables = self.lock()?;
        if tables.courses.remove(&course_id).is_none() {
            return Ok(0);
        }
        tables.enrollments.retain(|key, _| key.course_id != course_id);
        Ok(1)
    }

    async fn exists(&self, course_id: i64) -> AppResult<bool> {
        Ok(self.lock()?.courses.contains_key(&course_id))
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    async fn create(&self, new_enrollment: NewEnrollment) -> AppResult<Enrollment> {
        let key = new_enrollment.key();
        let mut tables = self.lock()?;

        // Same outcomes the foreign and primary keys give on PostgreSQL.
        if !tables.students.contains_key(&key.student_id) {
            return Err(AppError::student_not_found(key.student_id));
        }
        if !tables.courses.contains_key(&key.course_id) {
            return Err(AppError::course_not_found(key.course_id));
        }
        if tables.enrollments.contains_key(&key) {
            return Err(AppError::already_enrolled(key));
        }

        let created = new_enrollment.into_enrollment();
        tables.enrollments.insert(key, created.clone());
        Ok(created)
    }

    async fn find_by_key(&self, key: EnrollmentKey) -> AppResult<Option<Enrollment>> {
        Ok(self.lock()?.enrollments.get(&key).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Enrollment>> {
        Ok(self.lock()?.enrollments.values().cloned().collect())
    }

    async fn delete(&self, key: EnrollmentKey) -> AppResult<usize> {
        Ok(self.lock()?.enrollments.remove(&key).map_or(0, |_| 1))
    }

    async fn exists(&self, key: EnrollmentKey) -> AppResult<bool> {
        Ok(self.lock()?.enrollments.contains_key(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use jiff_diesel::ToDiesel;

    fn new_student(name: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            birthday: date(2001, 5, 17).to_diesel(),
        }
    }

    fn new_course(name: &str) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            available: true,
        }
    }

    fn new_enrollment(key: EnrollmentKey) -> NewEnrollment {
        NewEnrollment::new(key, date(2024, 9, 1).at(9, 0, 0, 0).to_diesel())
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially_per_table() {
        let store = MemoryStore::new();
        let first = StudentStore::create(&store, new_student("Ada")).await.unwrap();
        let second = StudentStore::create(&store, new_student("Alan")).await.unwrap();
        let course = CourseStore::create(&store, new_course("Logic")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(course.id, 1);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        let first = StudentStore::create(&store, new_student("Ada")).await.unwrap();
        StudentStore::delete(&store, first.id).await.unwrap();
        let second = StudentStore::create(&store, new_student("Alan")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_enrollment_requires_both_sides() {
        let store = MemoryStore::new();
        let student = StudentStore::create(&store, new_student("Ada")).await.unwrap();

        let err = EnrollmentStore::create(&store, new_enrollment(EnrollmentKey::new(student.id, 42)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "course with id 42 not found");
    }

    #[tokio::test]
    async fn test_duplicate_enrollment_is_conflict() {
        let store = MemoryStore::new();
        let student = StudentStore::create(&store, new_student("Ada")).await.unwrap();
        let course = CourseStore::create(&store, new_course("Logic")).await.unwrap();
        let key = EnrollmentKey::new(student.id, course.id);

        EnrollmentStore::create(&store, new_enrollment(key)).await.unwrap();
        let err = EnrollmentStore::create(&store, new_enrollment(key))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(EnrollmentStore::list_all(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deleting_student_cascades_to_enrollments() {
        let store = MemoryStore::new();
        let ada = StudentStore::create(&store, new_student("Ada")).await.unwrap();
        let alan = StudentStore::create(&store, new_student("Alan")).await.unwrap();
        let course = CourseStore::create(&store, new_course("Logic")).await.unwrap();
        EnrollmentStore::create(&store, new_enrollment(EnrollmentKey::new(ada.id, course.id)))
            .await
            .unwrap();
        EnrollmentStore::create(&store, new_enrollment(EnrollmentKey::new(alan.id, course.id)))
            .await
            .unwrap();

        assert_eq!(StudentStore::delete(&store, ada.id).await.unwrap(), 1);

        let remaining = EnrollmentStore::list_all(&store).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].student_id, alan.id);
    }

    #[tokio::test]
    async fn test_deleting_course_cascades_to_enrollments() {
        let store = MemoryStore::new();
        let ada = StudentStore::create(&store, new_student("Ada")).await.unwrap();
        let course = CourseStore::create(&store, new_course("Logic")).await.unwrap();
        let key = EnrollmentKey::new(ada.id, course.id);
        EnrollmentStore::create(&store, new_enrollment(key)).await.unwrap();

        assert_eq!(CourseStore::delete(&store, course.id).await.unwrap(), 1);
        assert!(!EnrollmentStore::exists(&store, key).await.unwrap());
        assert_eq!(CourseStore::delete(&store, course.id).await.unwrap(), 0);
    }
}
