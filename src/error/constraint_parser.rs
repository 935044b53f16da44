use std::sync::OnceLock;

use regex::Regex;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// PostgreSQL splits a violation into a primary message (naming the table and
/// constraint) and a `DETAIL` line (naming the key columns and values). The
/// parser accepts either part or both joined by a newline.
pub struct ConstraintParser;

/// Compiled regex patterns for constraint parsing, cached for performance
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
    referenced_table: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (a, b)=(1, 2)" in PostgreSQL messages
            key_value: compile(r"Key \(([^)]+)\)=\(([^)]*)\)"),
            column_name: compile(r#"column "([^"]+)""#),
            table_name: compile(r#"(?:table|relation) "([^"]+)""#),
            referenced_table: compile(r#"not present in table "([^"]+)""#),
        }
    }
}

// The patterns are literals; a failure here is a programming error.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("constraint pattern must compile")
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

/// A unique or primary-key violation reduced to its key columns and values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueViolation {
    pub table: String,
    pub keys: Vec<(String, String)>,
}

/// A foreign-key violation reduced to the dangling reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyViolation {
    pub table: String,
    pub column: String,
    pub value: String,
    pub referenced_table: Option<String>,
}

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation.
    ///
    /// # Examples
    /// ```
    /// use registrar::error::ConstraintParser;
    ///
    /// let message = "duplicate key value violates unique constraint \"enrollment_pkey\"\nKey (student_id, course_id)=(1, 2) already exists.";
    /// let parsed = ConstraintParser::parse_unique_violation(message, Some("enrollment_pkey")).unwrap();
    /// assert_eq!(parsed.table, "enrollment");
    /// assert_eq!(parsed.keys.len(), 2);
    /// ```
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<UniqueViolation> {
        let keys = Self::extract_key_values_from_message(message)?;
        let table = constraint_name
            .and_then(Self::parse_constraint_table)
            .or_else(|| Self::extract_table_from_message(message))
            .unwrap_or_else(|| "resource".to_string());
        Some(UniqueViolation { table, keys })
    }

    /// Parses a foreign key constraint violation.
    ///
    /// The constraint name gives the owning table and column
    /// (`enrollment_student_id_fkey`); the detail line gives the value and
    /// the referenced table.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<ForeignKeyViolation> {
        let referenced_table = Self::extract_referenced_table_from_message(message);
        let key_values = Self::extract_key_values_from_message(message);

        if let Some((table, column)) =
            constraint_name.and_then(Self::parse_foreign_key_constraint_name)
        {
            let value = key_values
                .and_then(|kv| kv.into_iter().find(|(k, _)| *k == column).map(|(_, v)| v))
                .unwrap_or_else(|| "invalid_reference".to_string());
            return Some(ForeignKeyViolation {
                table,
                column,
                value,
                referenced_table,
            });
        }

        let (column, value) = key_values?.into_iter().next()?;
        let table =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some(ForeignKeyViolation {
            table,
            column,
            value,
            referenced_table,
        })
    }

    /// Parses a not null constraint violation into `(entity, field)`.
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let field = Self::extract_column_from_message(message)?;
        let entity = Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Table owning a `_pkey` or `_key` constraint.
    ///
    /// - "enrollment_pkey" -> "enrollment"
    /// - "student_name_key" -> "student"
    pub fn parse_constraint_table(constraint_name: &str) -> Option<String> {
        if let Some(table) = constraint_name.strip_suffix("_pkey") {
            return (!table.is_empty()).then(|| table.to_string());
        }
        let without_suffix = constraint_name.strip_suffix("_key")?;
        let (table, _) = without_suffix.split_once('_')?;
        Some(table.to_string())
    }

    /// Handles patterns like "enrollment_student_id_fkey" -> ("enrollment", "student_id")
    pub fn parse_foreign_key_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let without_suffix = constraint_name.strip_suffix("_fkey")?;
        let (table, column) = without_suffix.split_once('_')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// First table or relation named in the message.
    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_referenced_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .referenced_table
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts `Key (a, b)=(1, 2)` into `[("a", "1"), ("b", "2")]`.
    ///
    /// Returns `None` when the pattern is absent or the column and value
    /// counts disagree.
    pub fn extract_key_values_from_message(message: &str) -> Option<Vec<(String, String)>> {
        let caps = Self::patterns().key_value.captures(message)?;
        let columns: Vec<&str> = caps.get(1)?.as_str().split(',').map(str::trim).collect();
        let values: Vec<&str> = caps.get(2)?.as_str().split(',').map(str::trim).collect();
        if columns.len() != values.len() {
            return None;
        }
        Some(
            columns
                .into_iter()
                .zip(values)
                .map(|(c, v)| (c.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUPLICATE_ENROLLMENT: &str = "duplicate key value violates unique constraint \"enrollment_pkey\"\nKey (student_id, course_id)=(1, 2) already exists.";
    const MISSING_STUDENT: &str = "insert or update on table \"enrollment\" violates foreign key constraint \"enrollment_student_id_fkey\"\nKey (student_id)=(999) is not present in table \"student\".";

    #[test]
    fn test_parse_composite_unique_violation() {
        let parsed =
            ConstraintParser::parse_unique_violation(DUPLICATE_ENROLLMENT, Some("enrollment_pkey"));
        assert_eq!(
            parsed,
            Some(UniqueViolation {
                table: "enrollment".to_string(),
                keys: vec![
                    ("student_id".to_string(), "1".to_string()),
                    ("course_id".to_string(), "2".to_string()),
                ],
            })
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "Key (name)=(Physics) already exists.";
        let parsed = ConstraintParser::parse_unique_violation(message, None).unwrap();
        assert_eq!(parsed.table, "resource");
        assert_eq!(parsed.keys, vec![("name".to_string(), "Physics".to_string())]);
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let parsed = ConstraintParser::parse_foreign_key_violation(
            MISSING_STUDENT,
            Some("enrollment_student_id_fkey"),
        );
        assert_eq!(
            parsed,
            Some(ForeignKeyViolation {
                table: "enrollment".to_string(),
                column: "student_id".to_string(),
                value: "999".to_string(),
                referenced_table: Some("student".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_foreign_key_violation_from_message_only() {
        let parsed = ConstraintParser::parse_foreign_key_violation(MISSING_STUDENT, None).unwrap();
        assert_eq!(parsed.table, "enrollment");
        assert_eq!(parsed.column, "student_id");
        assert_eq!(parsed.value, "999");
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"name\" of relation \"course\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message),
            Some(("course".to_string(), "name".to_string()))
        );
    }

    #[test]
    fn test_parse_constraint_table() {
        assert_eq!(
            ConstraintParser::parse_constraint_table("enrollment_pkey"),
            Some("enrollment".to_string())
        );
        assert_eq!(
            ConstraintParser::parse_constraint_table("student_name_key"),
            Some("student".to_string())
        );
        assert_eq!(ConstraintParser::parse_constraint_table("invalid"), None);
    }

    #[test]
    fn test_parse_foreign_key_constraint_name() {
        assert_eq!(
            ConstraintParser::parse_foreign_key_constraint_name("enrollment_course_id_fkey"),
            Some(("enrollment".to_string(), "course_id".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_foreign_key_constraint_name("enrollment_pkey"),
            None
        );
    }

    #[test]
    fn test_key_value_count_mismatch() {
        let message = "Key (student_id, course_id)=(1) already exists.";
        assert_eq!(ConstraintParser::extract_key_values_from_message(message), None);
    }

    #[test]
    fn test_regex_patterns_caching() {
        let patterns1 = ConstraintParser::patterns();
        let patterns2 = ConstraintParser::patterns();
        assert!(std::ptr::eq(patterns1, patterns2));
    }

    #[test]
    fn test_graceful_parsing_failures() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_foreign_key_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_not_null_violation(message), None);
    }
}
