//! Row set validators.

use std::collections::HashSet;
use std::fmt;

use stable_core::{field_value, Row};

use crate::error::{ConstraintError, ConstraintResult};

/// A predicate over a full candidate row set.
pub trait Validator: fmt::Debug + Send + Sync {
    /// Check the rows, returning the first violation found.
    fn validate(&self, rows: &[Row]) -> ConstraintResult<()>;
}

/// Requires a non-empty value for a field on every row.
///
/// An absent field counts as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValueValidator {
    field: String,
}

impl EmptyValueValidator {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Validator for EmptyValueValidator {
    fn validate(&self, rows: &[Row]) -> ConstraintResult<()> {
        if rows.iter().any(|row| field_value(row, &self.field).is_empty()) {
            return Err(ConstraintError::empty_value(&self.field));
        }
        Ok(())
    }
}

/// Forbids two rows sharing a non-empty value for a field.
///
/// Empty and absent values are exempt. Rows are scanned in order and the
/// first value seen twice is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateValueValidator {
    field: String,
}

impl DuplicateValueValidator {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Validator for DuplicateValueValidator {
    fn validate(&self, rows: &[Row]) -> ConstraintResult<()> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in rows {
            let value = field_value(row, &self.field);
            if value.is_empty() {
                continue;
            }
            if !seen.insert(value) {
                return Err(ConstraintError::duplicate_value(&self.field, value));
            }
        }
        Ok(())
    }
}
