// Validation failures and error types

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Numeric failure codes reported by the built-in rules
pub mod codes {
    /// Caller-defined failure without a category
    pub const UNCATEGORIZED: u32 = 0;
    pub const REQUIRED: u32 = 1001;
    pub const REQUIRED_CUSTOM: u32 = 1002;
    /// Length rule applied to a non-string value
    pub const LENGTH_TYPE: u32 = 1003;
    pub const TOO_SHORT: u32 = 1004;
    /// Magnitude rule applied to a non-integer value
    pub const INTEGER_TYPE: u32 = 1005;
    pub const TOO_SMALL: u32 = 1006;
    /// Pattern or enum rule applied to a non-string value
    pub const STRING_TYPE: u32 = 1007;
    pub const FORMAT_INVALID: u32 = 1008;
    pub const NOT_IN_ENUM: u32 = 1009;
    pub const TOO_LONG: u32 = 1010;
    pub const TOO_LARGE: u32 = 1011;
}

/// A single rule violation for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Field name that failed validation
    pub field: String,

    /// Human-readable description of the violation
    pub message: String,

    /// Numeric category, `0` when uncategorized
    pub code: u32,

    /// Name of the constraint that failed
    pub constraint: String,
}

impl ValidationFailure {
    /// Create an uncategorized failure
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: codes::UNCATEGORIZED,
            constraint: "custom".to_string(),
        }
    }

    /// Set the numeric code
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = code;
        self
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationFailure {}

/// Ordered, append-only list of failures produced by one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureCollector {
    errors: Vec<ValidationFailure>,
}

impl FailureCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>, code: u32) {
        self.push(ValidationFailure::new(field, message).with_code(code));
    }

    /// Record a fully built failure
    pub fn push(&mut self, failure: ValidationFailure) {
        self.errors.push(failure);
    }

    /// Check if any failure was recorded
    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded failures
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failures in discovery order
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.errors.iter()
    }

    /// Get failures for a specific field
    pub fn field_failures(&self, field: &str) -> Vec<&ValidationFailure> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Multi-line human-readable report
    ///
    /// The code line is omitted for uncategorized failures. An empty
    /// collector renders as `No errors`.
    pub fn render(&self) -> String {
        if self.errors.is_empty() {
            return "No errors".to_string();
        }

        let mut out = String::new();
        for (i, error) in self.errors.iter().enumerate() {
            out.push_str(&format!("Error {}:\n", i + 1));
            out.push_str(&format!("  Field: {}\n", error.field));
            out.push_str(&format!("  Message: {}\n", error.message));
            if error.code != codes::UNCATEGORIZED {
                out.push_str(&format!("  Code: {}\n", error.code));
            }
            out.push('\n');
        }
        out
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "code": e.code,
                    "constraint": e.constraint,
                })
            }).collect::<Vec<_>>()
        })
    }

    /// `Ok(())` when nothing failed, otherwise the collector itself
    pub fn into_result(self) -> std::result::Result<(), FailureCollector> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.errors
    }
}

impl fmt::Display for FailureCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FailureCollector {}

impl From<Vec<ValidationFailure>> for FailureCollector {
    fn from(errors: Vec<ValidationFailure>) -> Self {
        Self { errors }
    }
}

impl IntoIterator for FailureCollector {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FailureCollector {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Errors raised while building rules or configuration, never during a pass
#[derive(Debug, Error)]
pub enum FieldGuardError {
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FieldGuardError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FieldGuardError>;
