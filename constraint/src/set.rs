//! Ordered validator collections.

use stable_core::Row;

use crate::error::ConstraintResult;
use crate::validator::{DuplicateValueValidator, EmptyValueValidator, Validator};

/// An ordered list of validators run against every candidate row set.
#[derive(Debug, Default)]
pub struct ValidatorSet {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorSet {
    /// Create an empty validator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard set for a table.
    ///
    /// Install order: empty and duplicate checks for the primary key, then one
    /// empty check per non-empty field, then one duplicate check per unique field.
    pub fn for_table<'a>(
        primary_key: &str,
        non_empty_fields: impl IntoIterator<Item = &'a str>,
        unique_fields: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut set = Self::new();
        set.push(EmptyValueValidator::new(primary_key));
        set.push(DuplicateValueValidator::new(primary_key));
        for field in non_empty_fields {
            set.push(EmptyValueValidator::new(field));
        }
        for field in unique_fields {
            set.push(DuplicateValueValidator::new(field));
        }
        set
    }

    /// Append a validator.
    pub fn push(&mut self, validator: impl Validator + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Run every validator in order, stopping at the first violation.
    pub fn validate(&self, rows: &[Row]) -> ConstraintResult<()> {
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(rows))
    }

    /// Get the number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if there are no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
