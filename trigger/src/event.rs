//! Row events derived from snapshot diffs.

use std::collections::{HashMap, HashSet};

use stable_core::{field_value, Operation, Row};

/// A single net-effect change between two row snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent<'a> {
    /// A row whose key is absent from the old snapshot.
    Insert { new: &'a Row },
    /// A row whose key exists in both snapshots with different fields.
    Update { new: &'a Row, old: &'a Row },
    /// A row whose key is absent from the new snapshot.
    Delete { old: &'a Row },
}

impl<'a> TriggerEvent<'a> {
    /// Get the operation tag for this event.
    pub fn operation(&self) -> Operation {
        match self {
            TriggerEvent::Insert { .. } => Operation::Insert,
            TriggerEvent::Update { .. } => Operation::Update,
            TriggerEvent::Delete { .. } => Operation::Delete,
        }
    }

    /// Get the row after the change, if any.
    pub fn new_row(&self) -> Option<&'a Row> {
        match *self {
            TriggerEvent::Insert { new } | TriggerEvent::Update { new, .. } => Some(new),
            TriggerEvent::Delete { .. } => None,
        }
    }

    /// Get the row before the change, if any.
    pub fn old_row(&self) -> Option<&'a Row> {
        match *self {
            TriggerEvent::Update { old, .. } | TriggerEvent::Delete { old } => Some(old),
            TriggerEvent::Insert { .. } => None,
        }
    }
}

/// Compute the events that turn `old` into `new`, matching rows by `primary_key`.
///
/// Inserts and updates come first in `new` order, then deletes in `old` order.
/// A matched pair with identical fields produces no event.
pub fn diff<'a>(primary_key: &str, new: &'a [Row], old: &'a [Row]) -> Vec<TriggerEvent<'a>> {
    let mut old_by_key: HashMap<&str, &Row> = HashMap::with_capacity(old.len());
    for row in old {
        old_by_key.entry(field_value(row, primary_key)).or_insert(row);
    }

    let mut events = Vec::new();
    for row in new {
        match old_by_key.get(field_value(row, primary_key)) {
            None => events.push(TriggerEvent::Insert { new: row }),
            Some(&previous) if previous != row => events.push(TriggerEvent::Update {
                new: row,
                old: previous,
            }),
            Some(_) => {}
        }
    }

    let new_keys: HashSet<&str> = new.iter().map(|row| field_value(row, primary_key)).collect();
    for row in old {
        if !new_keys.contains(field_value(row, primary_key)) {
            events.push(TriggerEvent::Delete { old: row });
        }
    }

    events
}
