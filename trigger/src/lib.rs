//! STable Trigger
//!
//! Derive net-effect row events from two snapshots and notify observers.
//!
//! Responsibilities:
//! - Diff old and new row sets by primary key
//! - Suppress updates that change nothing
//! - Deliver events to triggers in registration order
//! - Abort on the first trigger error so the commit can be rejected
//!
//! Events are always produced in two passes: inserts and updates in new-row
//! order, then deletes in old-row order.

mod dispatcher;
mod error;
mod event;
mod trigger;

pub use dispatcher::TriggerDispatcher;
pub use error::{TriggerError, TriggerResult};
pub use event::{diff, TriggerEvent};
pub use trigger::{FnTrigger, Trigger};
