//! Table definitions.

use stable_constraint::ValidatorSet;

use crate::error::{TableError, TableResult};

/// The shape of a table: its primary key and field constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    primary_key: String,
    non_empty_fields: Vec<String>,
    unique_fields: Vec<String>,
}

impl TableConfig {
    /// Create a config with only a primary key.
    pub fn new(primary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
            ..Default::default()
        }
    }

    /// Require a non-empty value for `field` on every row.
    pub fn non_empty(mut self, field: impl Into<String>) -> Self {
        self.non_empty_fields.push(field.into());
        self
    }

    /// Require non-empty values for each of `fields`.
    pub fn non_empty_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_empty_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Forbid duplicate non-empty values for `field`.
    pub fn unique(mut self, field: impl Into<String>) -> Self {
        self.unique_fields.push(field.into());
        self
    }

    /// Forbid duplicate non-empty values for each of `fields`.
    pub fn unique_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn non_empty_field_names(&self) -> &[String] {
        &self.non_empty_fields
    }

    pub fn unique_field_names(&self) -> &[String] {
        &self.unique_fields
    }

    /// Check that the config describes a usable table.
    pub fn validate(&self) -> TableResult<()> {
        if self.primary_key.is_empty() {
            return Err(TableError::empty_primary_key());
        }
        Ok(())
    }

    /// Build the validators every commit runs.
    pub fn validators(&self) -> ValidatorSet {
        ValidatorSet::for_table(
            &self.primary_key,
            self.non_empty_fields.iter().map(String::as_str),
            self.unique_fields.iter().map(String::as_str),
        )
    }
}
