//! Constraint error types.

use thiserror::Error;

/// Result type for constraint checks.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// A constraint violated by a candidate row set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("empty value for field \"{field}\"")]
    EmptyValue { field: String },

    #[error("duplicate value \"{value}\" for field \"{field}\"")]
    DuplicateValue { field: String, value: String },
}

impl ConstraintError {
    pub fn empty_value(field: impl Into<String>) -> Self {
        Self::EmptyValue {
            field: field.into(),
        }
    }

    pub fn duplicate_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::DuplicateValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Get the field the violation is about.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field } | Self::DuplicateValue { field, .. } => field,
        }
    }
}
