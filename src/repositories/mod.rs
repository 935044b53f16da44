//! Repository layer for data access operations.
//!
//! Services talk to the store traits; `Repositories` decides which backend
//! sits behind them.

mod course_repo;
mod enrollment_repo;
mod memory;
mod student_repo;
mod traits;

use std::sync::Arc;

pub use course_repo::CourseRepository;
pub use enrollment_repo::EnrollmentRepository;
pub use memory::MemoryStore;
pub use student_repo::StudentRepository;
pub use traits::{CourseStore, EnrollmentStore, StudentStore};

use crate::db::AsyncDbPool;

/// Aggregates all stores for convenient access.
///
/// Every field is an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub students: Arc<dyn StudentStore>,
    pub courses: Arc<dyn CourseStore>,
    pub enrollments: Arc<dyn EnrollmentStore>,
}

impl Repositories {
    /// Creates PostgreSQL-backed repositories sharing one connection pool.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn postgres(pool: AsyncDbPool) -> Self {
        Self {
            students: Arc::new(StudentRepository::new(pool.clone())),
            courses: Arc::new(CourseRepository::new(pool.clone())),
            enrollments: Arc::new(EnrollmentRepository::new(pool)),
        }
    }

    /// Creates repositories over a single fresh `MemoryStore`.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            students: store.clone(),
            courses: store.clone(),
            enrollments: store,
        }
    }
}
