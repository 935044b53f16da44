//! Course repository for async database operations.
//!
//! Provides CRUD operations for the course table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Course, NewCourse, UpdateCourse};
use crate::repositories::CourseStore;

/// Course repository backed by PostgreSQL.
#[derive(Clone)]
pub struct CourseRepository {
    pool: AsyncDbPool,
}

impl CourseRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for CourseRepository {
    async fn create(&self, new_course: NewCourse) -> AppResult<Course> {
        use crate::schema::course::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(course)
            .values(&new_course)
            .returning(Course::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, course_id: i64) -> AppResult<Option<Course>> {
        use crate::schema::course::dsl::*;
        let mut conn = self.pool.get().await?;

        course
            .filter(id.eq(course_id))
            .select(Course::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> AppResult<Vec<Course>> {
        use crate::schema::course::dsl::*;
        let mut conn = self.pool.get().await?;

        course
            .order(id.asc())
            .select(Course::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, course_id: i64, changes: UpdateCourse) -> AppResult<Option<Course>> {
        use crate::schema::course::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(course.filter(id.eq(course_id)))
            .set(&changes)
            .returning(Course::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn delete(&self, course_id: i64) -> AppResult<usize> {
        use crate::schema::course::dsl::*;
        let mut conn = self.pool.get().await?;

        // enrollment rows go with it through ON DELETE CASCADE
        diesel::delete(course.filter(id.eq(course_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn exists(&self, course_id: i64) -> AppResult<bool> {
        use crate::schema::course::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::select(diesel::dsl::exists(course.filter(id.eq(course_id))))
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
