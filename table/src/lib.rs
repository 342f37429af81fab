//! STable Table
//!
//! The public face of the engine: an in-memory string table with a primary
//! key, optional non-empty and unique constraints, and triggers.
//!
//! Every mutation follows the same commit protocol under one write lock:
//! 1. Build the full candidate row set from a copy of the current rows
//! 2. Validate it against every constraint, first failure wins
//! 3. Dispatch insert/update/delete events to triggers, any error aborts
//! 4. Swap the candidate in as the new authoritative row set
//!
//! A failed mutation leaves the rows exactly as they were.
//!
//! # Example
//!
//! ```
//! use stable_table::{row, Table, TableConfig};
//!
//! let config = TableConfig::new("id").unique("email");
//! let table = Table::new(config, vec![row! { "id" => "1", "email" => "a@x.io" }]).unwrap();
//!
//! table.insert(vec![row! { "id" => "2", "email" => "b@x.io" }]).unwrap();
//! assert!(table.insert(vec![row! { "id" => "3", "email" => "a@x.io" }]).is_err());
//! assert_eq!(table.select(&row!()).unwrap().len(), 2);
//! ```

mod config;
mod error;
mod table;

pub use config::TableConfig;
pub use error::{TableError, TableResult};
pub use table::Table;

pub use stable_constraint::ConstraintError;
pub use stable_core::{row, Operation, Row, RowSet, Where};
pub use stable_trigger::{FnTrigger, Trigger, TriggerError, TriggerResult};
