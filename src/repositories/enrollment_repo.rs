//! Enrollment repository for async database operations.
//!
//! The table is keyed by `(student_id, course_id)`; the primary key and the
//! two foreign keys are what make concurrent creates safe.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{Enrollment, EnrollmentKey, NewEnrollment};
use crate::repositories::EnrollmentStore;

#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: AsyncDbPool,
}

impl EnrollmentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Maps an insert failure onto the domain errors for `key`.
    ///
    /// A unique violation can only come from the primary key, so it is
    /// reported with the same message as the service-level duplicate check.
    fn insert_error(key: EnrollmentKey, error: DieselError) -> AppError {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                AppError::already_enrolled(key)
            }
            other => DatabaseErrorConverter::convert_diesel_error(other, "insert enrollment"),
        }
    }
}

#[async_trait]
impl EnrollmentStore for EnrollmentRepository {
    async fn create(&self, new_enrollment: NewEnrollment) -> AppResult<Enrollment> {
        use crate::schema::enrollment::dsl::*;
        let mut conn = self.pool.get().await?;
        let key = new_enrollment.key();

        diesel::insert_into(enrollment)
            .values(&new_enrollment)
            .returning(Enrollment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| Self::insert_error(key, e))
    }

    async fn find_by_key(&self, key: EnrollmentKey) -> AppResult<Option<Enrollment>> {
        use crate::schema::enrollment::dsl::*;
        let mut conn = self.pool.get().await?;

        enrollment
            .find((key.student_id, key.course_id))
            .select(Enrollment::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> AppResult<Vec<Enrollment>> {
        use crate::schema::enrollment::dsl::*;
        let mut conn = self.pool.get().await?;

        enrollment
            .order((student_id.asc(), course_id.asc()))
            .select(Enrollment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete(&self, key: EnrollmentKey) -> AppResult<usize> {
        use crate::schema::enrollment::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(enrollment.find((key.student_id, key.course_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn exists(&self, key: EnrollmentKey) -> AppResult<bool> {
        use crate::schema::enrollment::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::select(diesel::dsl::exists(
            enrollment.find((key.student_id, key.course_id)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
