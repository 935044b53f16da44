//! Student repository for async database operations.
//!
//! Provides CRUD operations for the student table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewStudent, Student, UpdateStudent};
use crate::repositories::StudentStore;

/// Student repository holding an async connection pool.
///
/// `AsyncDbPool` is reference counted, so cloning is cheap.
#[derive(Clone)]
pub struct StudentRepository {
    pool: AsyncDbPool,
}

impl StudentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for StudentRepository {
    async fn create(&self, new_student: NewStudent) -> AppResult<Student> {
        use crate::schema::student::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(student)
            .values(&new_student)
            .returning(Student::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, student_id: i64) -> AppResult<Option<Student>> {
        use crate::schema::student::dsl::*;
        let mut conn = self.pool.get().await?;

        student
            .filter(id.eq(student_id))
            .select(Student::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> AppResult<Vec<Student>> {
        use crate::schema::student::dsl::*;
        let mut conn = self.pool.get().await?;

        student
            .order(id.asc())
            .select(Student::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, student_id: i64, changes: UpdateStudent) -> AppResult<Option<Student>> {
        use crate::schema::student::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(student.filter(id.eq(student_id)))
            .set(&changes)
            .returning(Student::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn delete(&self, student_id: i64) -> AppResult<usize> {
        use crate::schema::student::dsl::*;
        let mut conn = self.pool.get().await?;

        // enrollment rows go with it through ON DELETE CASCADE
        diesel::delete(student.filter(id.eq(student_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn exists(&self, student_id: i64) -> AppResult<bool> {
        use crate::schema::student::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::select(diesel::dsl::exists(student.filter(id.eq(student_id))))
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
