//! Trigger error types.

use std::error::Error as StdError;

use thiserror::Error;

/// Result type for trigger handlers and dispatch.
pub type TriggerResult<T> = Result<T, TriggerError>;

/// An error returned by a trigger to veto a commit.
///
/// Wraps whatever the trigger produced and displays it unchanged.
#[derive(Debug, Error)]
#[error("{inner}")]
pub struct TriggerError {
    inner: Box<dyn StdError + Send + Sync>,
}

impl TriggerError {
    /// Wrap an arbitrary error.
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            inner: error.into(),
        }
    }

    /// Create an error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(message.into())
    }

    /// Borrow the wrapped error.
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Attempt to downcast the wrapped error to a concrete type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Unwrap into the original boxed error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync> {
        self.inner
    }
}
