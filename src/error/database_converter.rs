use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                message: "record not found".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    /// Primary message and detail line joined, the form the parser expects.
    fn full_message(info: &dyn DatabaseErrorInformation) -> String {
        match info.details() {
            Some(details) => format!("{}\n{}", info.message(), details),
            None => info.message().to_string(),
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let message = Self::full_message(info);
        let constraint_name = info.constraint_name();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                match ConstraintParser::parse_unique_violation(&message, constraint_name) {
                    Some(violation) => {
                        let (columns, values): (Vec<_>, Vec<_>) =
                            violation.keys.into_iter().unzip();
                        AppError::Conflict {
                            message: format!(
                                "{} with ({})=({}) already exists",
                                violation.table,
                                columns.join(", "),
                                values.join(", ")
                            ),
                            entity: violation.table,
                        }
                    }
                    None => Self::unparsed(operation, "Unique constraint violation", &message),
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                match ConstraintParser::parse_foreign_key_violation(&message, constraint_name) {
                    // Every foreign key in the schema points at an `id` column.
                    Some(violation) => match violation.referenced_table {
                        Some(referenced) => AppError::NotFound {
                            message: format!("{} with id {} not found", referenced, violation.value),
                            entity: referenced,
                        },
                        None => AppError::Validation {
                            field: violation.column,
                            reason: format!(
                                "Invalid reference from {} with value '{}'",
                                violation.table, violation.value
                            ),
                        },
                    },
                    None => Self::unparsed(operation, "Foreign key constraint violation", &message),
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                match ConstraintParser::parse_not_null_violation(&message) {
                    Some((entity, field)) => AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    },
                    None => Self::unparsed(operation, "Not null constraint violation", &message),
                }
            }
            _ => Self::unparsed(operation, "Database error", &message),
        }
    }

    fn unparsed(operation: &str, label: &str, message: &str) -> AppError {
        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("{}: {}", label, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        details: Option<String>,
        constraint_name: Option<String>,
    }

    impl DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            self.details.as_deref()
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, message: &str, details: Option<&str>, constraint: Option<&str>) -> DieselError {
        DieselError::DatabaseError(
            kind,
            Box::new(MockDatabaseErrorInfo {
                message: message.to_string(),
                details: details.map(str::to_string),
                constraint_name: constraint.map(str::to_string),
            }),
        )
    }

    #[test]
    fn test_convert_not_found_error() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find student");
        assert!(matches!(result, AppError::NotFound { ref entity, .. } if entity == "resource"));
    }

    #[test]
    fn test_convert_composite_unique_violation() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"enrollment_pkey\"",
            Some("Key (student_id, course_id)=(1, 2) already exists."),
            Some("enrollment_pkey"),
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "insert enrollment") {
            AppError::Conflict { entity, message } => {
                assert_eq!(entity, "enrollment");
                assert_eq!(message, "enrollment with (student_id, course_id)=(1, 2) already exists");
            }
            other => panic!("Expected Conflict error, got: {:?}", other),
        }
    }

    #[test]
    fn test_convert_foreign_key_violation_to_not_found() {
        let error = database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert or update on table \"enrollment\" violates foreign key constraint \"enrollment_course_id_fkey\"",
            Some("Key (course_id)=(77) is not present in table \"course\"."),
            Some("enrollment_course_id_fkey"),
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "insert enrollment") {
            AppError::NotFound { entity, message } => {
                assert_eq!(entity, "course");
                assert_eq!(message, "course with id 77 not found");
            }
            other => panic!("Expected NotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_convert_not_null_violation() {
        let error = database_error(
            DatabaseErrorKind::NotNullViolation,
            "null value in column \"name\" of relation \"student\" violates not-null constraint",
            None,
            None,
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "insert student") {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "name");
                assert!(reason.contains("student"));
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_violation_is_database_error() {
        let error = database_error(DatabaseErrorKind::UniqueViolation, "garbled", None, None);
        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert enrollment");
        assert!(matches!(result, AppError::Database { ref operation, .. } if operation == "insert enrollment"));
    }
}
