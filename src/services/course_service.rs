//! Course service for business logic operations.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Course, NewCourse, UpdateCourse};
use crate::repositories::CourseStore;

#[derive(Clone)]
pub struct CourseService {
    repo: Arc<dyn CourseStore>,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseStore>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new_course: NewCourse) -> AppResult<Course> {
        self.repo.create(new_course).await
    }

    /// Gets a course by id, or `NotFound` error.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Course> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::course_not_found(id))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Course>> {
        self.repo.list_all().await
    }

    /// Replaces a course's name and availability; the id never changes.
    pub async fn update(&self, id: i64, changes: UpdateCourse) -> AppResult<Course> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::course_not_found(id))
    }

    /// Deletes a course together with its enrollments.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        match self.repo.delete(id).await? {
            0 => Err(AppError::course_not_found(id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    fn physics() -> NewCourse {
        NewCourse {
            name: "Physics".to_string(),
            available: true,
        }
    }

    #[tokio::test]
    async fn test_create_find_update() {
        let service = CourseService::new(Arc::new(MemoryStore::new()));
        let created = service.create(physics()).await.unwrap();
        assert_eq!(service.find_by_id(created.id).await.unwrap(), created);

        let updated = service
            .update(
                created.id,
                UpdateCourse {
                    name: "Optics".to_string(),
                    available: false,
                },
            )
            .await
            .unwrap();
        assert_eq!(
            updated,
            Course {
                id: created.id,
                name: "Optics".to_string(),
                available: false,
            }
        );
    }

    #[tokio::test]
    async fn test_missing_course_messages() {
        let service = CourseService::new(Arc::new(MemoryStore::new()));
        let changes = UpdateCourse {
            name: "Optics".to_string(),
            available: true,
        };

        for err in [
            service.find_by_id(9).await.unwrap_err(),
            service.update(9, changes).await.unwrap_err(),
            service.delete(9).await.unwrap_err(),
        ] {
            assert_eq!(err.to_string(), "course with id 9 not found");
        }
    }

    #[tokio::test]
    async fn test_find_all_returns_every_course() {
        let service = CourseService::new(Arc::new(MemoryStore::new()));
        service.create(physics()).await.unwrap();
        service
            .create(NewCourse {
                name: "Chemistry".to_string(),
                available: false,
            })
            .await
            .unwrap();

        let names: Vec<String> = service
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Physics", "Chemistry"]);
    }
}
