//! Table fixtures.

use stable_table::{Row, Table, TableConfig};

use crate::recorder::RecordingTrigger;

/// Primary key value the fixture triggers reject.
pub const FAILING_KEY: &str = "triggerError";

/// Install a test logger once; `RUST_LOG=trace` shows engine logs.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

/// A table keyed by `pk` with `nonEmpty` required and `uniq` unique, plus an
/// attached recording trigger that rejects [`FAILING_KEY`].
pub fn constrained_table(rows: Vec<Row>) -> (Table, RecordingTrigger) {
    let config = TableConfig::new("pk").non_empty("nonEmpty").unique("uniq");
    with_trigger(config, rows)
}

/// A table keyed by `pk` with no other constraints, plus an attached
/// recording trigger that rejects [`FAILING_KEY`].
pub fn plain_table(rows: Vec<Row>) -> (Table, RecordingTrigger) {
    with_trigger(TableConfig::new("pk"), rows)
}

fn with_trigger(config: TableConfig, rows: Vec<Row>) -> (Table, RecordingTrigger) {
    init_logging();
    let table = Table::new(config, rows).unwrap_or_else(|e| panic!("fixture rows invalid: {e}"));
    let trigger = RecordingTrigger::new("pk").failing_on(FAILING_KEY);
    table.add_trigger(trigger.clone());
    (table, trigger)
}
