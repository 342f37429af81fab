//! Table error types.

use stable_constraint::ConstraintError;
use stable_trigger::TriggerError;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors returned by table construction, mutations and queries.
///
/// Any error from a mutation means nothing was applied.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table definition is unusable.
    #[error("{message}")]
    Configuration { message: String },

    /// The candidate rows violate a constraint.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// The operation is not allowed on this field.
    #[error("update of primary key is forbidden")]
    ForbiddenOperation { field: String },

    /// A trigger vetoed the commit.
    #[error(transparent)]
    Trigger(#[from] TriggerError),

    /// A query matched no rows.
    #[error("no rows in result set")]
    NotFound,
}

impl TableError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn empty_primary_key() -> Self {
        Self::configuration("primary key is empty")
    }

    pub fn forbidden_operation(field: impl Into<String>) -> Self {
        Self::ForbiddenOperation {
            field: field.into(),
        }
    }

    /// Check if this is a query that found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Get the constraint violation, if this is one.
    pub fn as_constraint(&self) -> Option<&ConstraintError> {
        match self {
            Self::Constraint(err) => Some(err),
            _ => None,
        }
    }
}
