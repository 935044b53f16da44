//! Student service for business logic operations.
//!
//! Turns missing rows into `NotFound` errors and otherwise passes
//! through to the configured student store.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{NewStudent, Student, UpdateStudent};
use crate::repositories::StudentStore;

/// Student service for handling student-related business logic.
#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentStore>,
}

impl StudentService {
    /// Creates a new StudentService with the given store.
    pub fn new(repo: Arc<dyn StudentStore>) -> Self {
        Self { repo }
    }

    /// Creates a new student.
    ///
    /// # Arguments
    /// * `new_student` - Name and birthday; any values are accepted
    ///
    /// # Returns
    /// The created student with its assigned id
    pub async fn create(&self, new_student: NewStudent) -> AppResult<Student> {
        self.repo.create(new_student).await
    }

    /// Gets a student by id.
    ///
    /// # Returns
    /// The student if found, or `NotFound` error
    pub async fn find_by_id(&self, id: i64) -> AppResult<Student> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::student_not_found(id))
    }

    /// Lists all students.
    pub async fn find_all(&self) -> AppResult<Vec<Student>> {
        self.repo.list_all().await
    }

    /// Replaces a student's name and birthday.
    ///
    /// # Arguments
    /// * `id` - The student's id, which never changes
    /// * `changes` - The new name and birthday
    ///
    /// # Returns
    /// The updated student, or `NotFound` error
    pub async fn update(&self, id: i64, changes: UpdateStudent) -> AppResult<Student> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::student_not_found(id))
    }

    /// Deletes a student together with its enrollments.
    ///
    /// # Returns
    /// `Ok(())` if deleted, or `NotFound` error
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::student_not_found(id));
        }
        Ok(())
    }
}
