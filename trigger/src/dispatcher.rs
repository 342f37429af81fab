//! Trigger dispatch.

use std::fmt;

use stable_core::Row;

use crate::error::TriggerResult;
use crate::event::diff;
use crate::trigger::Trigger;

/// Registered triggers, notified in registration order.
#[derive(Default)]
pub struct TriggerDispatcher {
    triggers: Vec<Box<dyn Trigger>>,
}

impl TriggerDispatcher {
    /// Create a dispatcher with no triggers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger after all existing ones.
    pub fn add(&mut self, trigger: impl Trigger + 'static) {
        self.triggers.push(Box::new(trigger));
    }

    /// Get the number of registered triggers.
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Check if no triggers are registered.
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Diff the snapshots and deliver every event to every trigger.
    ///
    /// Each event reaches all triggers before the next event is delivered. The
    /// first trigger error stops dispatch and is returned as is. With no
    /// triggers registered the diff is skipped. Returns the number of events
    /// delivered.
    pub fn dispatch(&self, primary_key: &str, new: &[Row], old: &[Row]) -> TriggerResult<usize> {
        if self.triggers.is_empty() {
            return Ok(0);
        }

        let events = diff(primary_key, new, old);
        for event in &events {
            log::trace!(
                "dispatching {} for key {:?} to {} trigger(s)",
                event.operation(),
                event
                    .new_row()
                    .or(event.old_row())
                    .and_then(|row| row.get(primary_key)),
                self.triggers.len()
            );
            for trigger in &self.triggers {
                trigger.handle(event.operation(), event.new_row(), event.old_row())?;
            }
        }
        Ok(events.len())
    }
}

impl fmt::Debug for TriggerDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerDispatcher")
            .field("triggers", &self.triggers.len())
            .finish()
    }
}
