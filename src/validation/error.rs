//! Validation errors and the violations they carry.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::kind::RecordKind;

/// Category of a single field-level problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    /// A required field is absent or null.
    MissingRequiredField,
    /// A present field holds the wrong primitive type.
    TypeMismatch,
    /// An element of a sequence field has the wrong type or shape.
    ElementShapeViolation,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingRequiredField => "missing_required_field",
            ViolationKind::TypeMismatch => "type_mismatch",
            ViolationKind::ElementShapeViolation => "element_shape_violation",
        }
    }
}

/// One problem found in a candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path, e.g. `content`, `relatedVocab[3]`, `images[0].filename`.
    pub path: String,
    pub kind: ViolationKind,
    /// Expected shape, e.g. `string`, `array of string`, `number`.
    pub expected: String,
    /// What was there instead, e.g. `absent`, `null`, `number`.
    pub found: String,
}

impl Violation {
    pub fn missing(path: impl Into<String>, expected: &str, found: Option<&Value>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::MissingRequiredField,
            expected: expected.to_string(),
            found: found.map(json_type_name).unwrap_or("absent").to_string(),
        }
    }

    pub fn type_mismatch(path: impl Into<String>, expected: &str, actual: &Value) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::TypeMismatch,
            expected: expected.to_string(),
            found: json_type_name(actual).to_string(),
        }
    }

    pub fn element_shape(path: impl Into<String>, expected: &str, actual: &Value) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::ElementShapeViolation,
            expected: expected.to_string(),
            found: json_type_name(actual).to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at '{}': expected {}, found {}",
            self.kind.as_str(),
            self.path,
            self.expected,
            self.found
        )
    }
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The requested kind is not one of the eight record shapes.
    #[error("unknown record kind '{0}'")]
    UnknownKind(String),

    /// The candidate does not conform to its kind's shape.
    #[error("{kind} record has {} violation(s): {}", .violations.len(), summarize(.violations))]
    Invalid {
        kind: RecordKind,
        violations: Vec<Violation>,
    },
}

impl ValidationError {
    /// Field violations; empty for `UnknownKind`.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationError::UnknownKind(_) => &[],
            ValidationError::Invalid { violations, .. } => violations,
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_reports_absent_or_null() {
        let absent = Violation::missing("content", "string", None);
        assert_eq!(absent.found, "absent");

        let null = Violation::missing("content", "string", Some(&Value::Null));
        assert_eq!(null.found, "null");
        assert_eq!(null.kind, ViolationKind::MissingRequiredField);
    }

    #[test]
    fn test_error_message_lists_every_violation() {
        let err = ValidationError::Invalid {
            kind: RecordKind::Link,
            violations: vec![
                Violation::missing("url", "string", None),
                Violation::type_mismatch("owner", "string", &json!(3)),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Link record has 2 violation(s): missing_required_field at 'url': expected string, \
             found absent; type_mismatch at 'owner': expected string, found number"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_unknown_kind_has_no_violations() {
        let err = ValidationError::UnknownKind("Lesson".to_string());
        assert_eq!(err.to_string(), "unknown record kind 'Lesson'");
        assert!(err.violations().is_empty());
    }
}
