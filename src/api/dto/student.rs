//! Student DTOs for API requests and responses.

use jiff::civil::Date;
use jiff_diesel::ToDiesel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{NewStudent, Student, UpdateStudent};

/// Body of `POST /students` and `PUT /students/{id}`.
///
/// Both fields are required on update as well; nothing is defaulted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"name": "Isaac Newton", "birthday": "1643-01-04"}))]
pub struct StudentRequest {
    pub name: String,
    #[schema(value_type = String, format = Date)]
    pub birthday: Date,
}

impl StudentRequest {
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            name: self.name,
            birthday: self.birthday.to_diesel(),
        }
    }

    pub fn into_update_student(self) -> UpdateStudent {
        UpdateStudent {
            name: self.name,
            birthday: self.birthday.to_diesel(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"id": 1, "name": "Isaac Newton", "birthday": "1643-01-04"}))]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, format = Date)]
    pub birthday: Date,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            birthday: student.birthday.to_jiff(),
        }
    }
}
