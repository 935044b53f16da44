//! Course DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Course, NewCourse, UpdateCourse};

/// Body of `POST /courses` and `PUT /courses/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"name": "Physics", "available": true}))]
pub struct CourseRequest {
    pub name: String,
    pub available: bool,
}

impl CourseRequest {
    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            name: self.name,
            available: self.available,
        }
    }

    pub fn into_update_course(self) -> UpdateCourse {
        UpdateCourse {
            name: self.name,
            available: self.available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"id": 1, "name": "Physics", "available": true}))]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub available: bool,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            available: course.available,
        }
    }
}
