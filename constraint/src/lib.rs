//! STable Constraint
//!
//! Validate whole candidate row sets before they are committed.
//!
//! Responsibilities:
//! - Reject rows with an empty value in a required field
//! - Reject duplicate non-empty values in a unique field
//! - Run validators in a fixed order, first failure wins
//!
//! Validation is always global: a validator sees the entire prospective row
//! set, never just the rows a mutation touched.

mod error;
mod set;
mod validator;

pub use error::{ConstraintError, ConstraintResult};
pub use set::ValidatorSet;
pub use validator::{DuplicateValueValidator, EmptyValueValidator, Validator};
