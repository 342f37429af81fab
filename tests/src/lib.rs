//! STable integration test framework.
//!
//! Provides a recording trigger and table fixtures shared by the tests under
//! `tests/`.

mod fixture;

pub use fixture::{constrained_table, init_logging, plain_table, FAILING_KEY};
pub use recorder::{RecordingTrigger, TriggerRecord};

/// Everything a test file needs.
pub mod prelude {
    pub use crate::{
        constrained_table, init_logging, plain_table, RecordingTrigger, TriggerRecord,
        FAILING_KEY,
    };
    pub use stable_table::{
        row, ConstraintError, FnTrigger, Operation, Row, RowSet, Table, TableConfig,
        TableError, Trigger, TriggerError,
    };
}
