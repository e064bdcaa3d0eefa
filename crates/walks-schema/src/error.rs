//! Schema validation error types.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::path::FieldPath;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

/// Primitive kind of a raw value, used in type-mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found while validating a raw entry.
///
/// Leaf variants carry the full path of the offending value. A failure inside
/// a sequence element is wrapped in [`ValidationError::Nested`], whose path
/// ends in the element index.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field is absent.
    #[error("{path}: missing required field")]
    MissingField { path: FieldPath },

    /// A field is present but holds the wrong primitive kind.
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: FieldPath,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A value outside a closed set (difficulty, content-block tag).
    #[error("{path}: invalid value {value:?}, expected one of {}", join_allowed(.allowed))]
    EnumViolation {
        path: FieldPath,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A key the schema does not declare. Only raised in strict mode.
    #[error("{path}: unknown field")]
    UnknownField { path: FieldPath },

    /// A failure inside element `path` of a sequence.
    #[error("{inner}")]
    Nested {
        path: FieldPath,
        inner: Box<ValidationError>,
    },
}

fn join_allowed(allowed: &[&str]) -> String {
    allowed.join(" | ")
}

impl ValidationError {
    /// Wrap `inner` as a failure of the sequence element at `path`.
    #[must_use]
    pub fn nested(path: FieldPath, inner: Self) -> Self {
        Self::Nested {
            path,
            inner: Box::new(inner),
        }
    }

    /// The innermost error, with all nesting removed.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        let mut current = self;
        while let Self::Nested { inner, .. } = current {
            current = inner;
        }
        current
    }

    /// Full path of the offending value.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        match self.leaf() {
            Self::MissingField { path }
            | Self::TypeMismatch { path, .. }
            | Self::EnumViolation { path, .. }
            | Self::UnknownField { path }
            | Self::Nested { path, .. } => path,
        }
    }

    /// Snake-case name of the leaf error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self.leaf() {
            Self::MissingField { .. } => "missing_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::EnumViolation { .. } => "enum_violation",
            Self::UnknownField { .. } => "unknown_field",
            Self::Nested { .. } => "nested",
        }
    }

    /// Element paths crossed on the way to the leaf, outermost first.
    #[must_use]
    pub fn element_paths(&self) -> Vec<&FieldPath> {
        let mut paths = Vec::new();
        let mut current = self;
        while let Self::Nested { path, inner } = current {
            paths.push(path);
            current = inner;
        }
        paths
    }
}

/// Every problem found in one raw entry, in traversal order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Returns `None` when `errors` is empty.
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// The first problem in traversal order.
    #[must_use]
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    #[must_use]
    pub fn into_first(self) -> ValidationError {
        self.0.into_iter().next().unwrap_or_else(|| {
            unreachable!("ValidationErrors is constructed non-empty")
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        write!(
            f,
            "{count} validation error{}",
            if count == 1 { "" } else { "s" }
        )?;
        for error in &self.0 {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enum_error() -> ValidationError {
        ValidationError::EnumViolation {
            path: FieldPath::root()
                .field("visitorInfo")
                .index(2)
                .field("content")
                .index(0)
                .field("type"),
            value: "quote".into(),
            allowed: &["paragraph", "list"],
        }
    }

    fn nested_error() -> ValidationError {
        let visitor = FieldPath::root().field("visitorInfo").index(2);
        ValidationError::nested(
            visitor.clone(),
            ValidationError::nested(visitor.field("content").index(0), enum_error()),
        )
    }

    #[test]
    fn value_kind_of() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
    }

    #[test]
    fn enum_violation_message() {
        assert_eq!(
            enum_error().to_string(),
            "visitorInfo[2].content[0].type: invalid value \"quote\", expected one of paragraph | list"
        );
    }

    #[test]
    fn nested_displays_leaf_message() {
        assert_eq!(nested_error().to_string(), enum_error().to_string());
    }

    #[test]
    fn nested_path_and_kind_come_from_leaf() {
        let error = nested_error();
        assert_eq!(error.kind(), "enum_violation");
        assert_eq!(error.path().to_string(), "visitorInfo[2].content[0].type");
        assert_eq!(error.leaf(), &enum_error());
    }

    #[test]
    fn element_paths_outermost_first() {
        let error = nested_error();
        let paths: Vec<String> = error
            .element_paths()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(paths, ["visitorInfo[2]", "visitorInfo[2].content[0]"]);
    }

    #[test]
    fn type_mismatch_serializes_with_kind_tag() {
        let error = ValidationError::TypeMismatch {
            path: FieldPath::root().field("isAccessible"),
            expected: ValueKind::Boolean,
            found: ValueKind::String,
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "kind": "type_mismatch",
                "path": "isAccessible",
                "expected": "boolean",
                "found": "string",
            })
        );
    }

    #[test]
    fn errors_collection_is_never_empty() {
        assert!(ValidationErrors::new(Vec::new()).is_none());
        let errors = ValidationErrors::new(vec![enum_error(), nested_error()]).unwrap();
        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
        assert_eq!(errors.first(), &enum_error());
        assert!(errors.to_string().starts_with("2 validation errors; "));
    }
}
