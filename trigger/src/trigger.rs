//! The trigger callback contract.

use std::sync::Arc;

use stable_core::{Operation, Row};

use crate::error::TriggerResult;

/// An observer of committed row changes.
///
/// `new` is set for inserts and updates, `old` for updates and deletes.
/// Handlers run synchronously while the table is locked for writing, so they
/// must not block and must not call back into the same table.
///
/// If a later event of the same commit is rejected, the commit is dropped but
/// side effects a trigger already performed for earlier events stay its own.
pub trait Trigger: Send + Sync {
    /// Handle one row event. Returning an error aborts the whole commit.
    fn handle(&self, operation: Operation, new: Option<&Row>, old: Option<&Row>)
        -> TriggerResult<()>;
}

impl<T: Trigger + ?Sized> Trigger for Arc<T> {
    fn handle(
        &self,
        operation: Operation,
        new: Option<&Row>,
        old: Option<&Row>,
    ) -> TriggerResult<()> {
        (**self).handle(operation, new, old)
    }
}

impl<T: Trigger + ?Sized> Trigger for Box<T> {
    fn handle(
        &self,
        operation: Operation,
        new: Option<&Row>,
        old: Option<&Row>,
    ) -> TriggerResult<()> {
        (**self).handle(operation, new, old)
    }
}

/// Adapts a closure into a [`Trigger`].
pub struct FnTrigger<F> {
    handler: F,
}

impl<F> FnTrigger<F>
where
    F: Fn(Operation, Option<&Row>, Option<&Row>) -> TriggerResult<()> + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> Trigger for FnTrigger<F>
where
    F: Fn(Operation, Option<&Row>, Option<&Row>) -> TriggerResult<()> + Send + Sync,
{
    fn handle(
        &self,
        operation: Operation,
        new: Option<&Row>,
        old: Option<&Row>,
    ) -> TriggerResult<()> {
        (self.handler)(operation, new, old)
    }
}
