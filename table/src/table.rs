//! The table facade.

use parking_lot::RwLock;
use stable_constraint::ValidatorSet;
use stable_core::{apply_fields, Row, RowSet, Where};
use stable_store::RowStore;
use stable_trigger::{Trigger, TriggerDispatcher};

use crate::config::TableConfig;
use crate::error::{TableError, TableResult};

/// State guarded by the table lock.
#[derive(Debug)]
struct TableState {
    store: RowStore,
    triggers: TriggerDispatcher,
}

/// An in-memory string table.
///
/// Safe to share between threads. Reads run concurrently; mutations are
/// exclusive for their whole validate, dispatch and commit sequence.
#[derive(Debug)]
pub struct Table {
    validators: ValidatorSet,
    state: RwLock<TableState>,
}

impl Table {
    /// Create a table holding `rows`.
    ///
    /// The initial rows are validated exactly like any later commit.
    pub fn new(config: TableConfig, rows: impl IntoIterator<Item = Row>) -> TableResult<Self> {
        config.validate()?;
        let table = Self {
            validators: config.validators(),
            state: RwLock::new(TableState {
                store: RowStore::new(config.primary_key()),
                triggers: TriggerDispatcher::new(),
            }),
        };
        {
            let mut state = table.state.write();
            table.commit(&mut state, rows.into_iter().collect())?;
        }
        Ok(table)
    }

    /// Create a table from a primary key and lists of constrained fields.
    pub fn with_constraints<'a>(
        rows: impl IntoIterator<Item = Row>,
        primary_key: &str,
        non_empty_fields: impl IntoIterator<Item = &'a str>,
        unique_fields: impl IntoIterator<Item = &'a str>,
    ) -> TableResult<Self> {
        let config = TableConfig::new(primary_key)
            .non_empty_fields(non_empty_fields)
            .unique_fields(unique_fields);
        Self::new(config, rows)
    }

    /// Get the primary key field name.
    pub fn primary_key(&self) -> String {
        self.state.read().store.primary_key().to_string()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    /// Check if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.state.read().store.is_empty()
    }

    /// Get the number of registered triggers.
    pub fn trigger_count(&self) -> usize {
        self.state.read().triggers.len()
    }

    /// Register a trigger; it sees every commit from now on.
    pub fn add_trigger(&self, trigger: impl Trigger + 'static) {
        self.state.write().triggers.add(trigger);
    }

    // ========== Mutations ==========

    /// Append rows. Returns the number of rows inserted.
    pub fn insert(&self, rows: impl IntoIterator<Item = Row>) -> TableResult<usize> {
        let mut state = self.state.write();
        let mut candidate = state.store.copy();
        let before = candidate.len();
        candidate.extend(rows);
        let count = candidate.len() - before;

        self.commit(&mut state, candidate)?;
        log::debug!("insert: {} row(s), {} total", count, state.store.len());
        Ok(count)
    }

    /// Insert rows or merge them into existing rows with the same primary key.
    ///
    /// Merging overwrites only the fields present in the incoming row. Returns
    /// the number of rows submitted, changed or not.
    pub fn upsert(&self, rows: impl IntoIterator<Item = Row>) -> TableResult<usize> {
        let mut state = self.state.write();
        let count = self.upsert_locked(&mut state, rows.into_iter().collect())?;
        log::debug!("upsert: {} row(s), {} total", count, state.store.len());
        Ok(count)
    }

    /// Overwrite `fields` on every row matching `conditions`.
    ///
    /// The primary key cannot be updated. Returns the number of matched rows,
    /// even when their values end up unchanged.
    pub fn update(&self, fields: &Row, conditions: &Where) -> TableResult<usize> {
        let mut state = self.state.write();
        let primary_key = state.store.primary_key();
        if fields.contains_key(primary_key) {
            return Err(TableError::forbidden_operation(primary_key));
        }

        let mut matched = state.store.filter(conditions);
        if matched.is_empty() {
            return Ok(0);
        }
        for row in &mut matched {
            apply_fields(row, fields);
        }

        let count = self.upsert_locked(&mut state, matched)?;
        log::debug!("update: {} row(s) matched", count);
        Ok(count)
    }

    /// Remove every row matching `conditions`. Returns the number removed.
    pub fn delete(&self, conditions: &Where) -> TableResult<usize> {
        let mut state = self.state.write();
        let doomed = state.store.filter(conditions);
        if doomed.is_empty() {
            return Ok(0);
        }

        let mut candidate = state.store.copy();
        state.store.delete_by_key(&mut candidate, &doomed);
        self.commit(&mut state, candidate)?;
        log::debug!("delete: {} row(s), {} left", doomed.len(), state.store.len());
        Ok(doomed.len())
    }

    // ========== Queries ==========

    /// Get copies of all rows matching `conditions`, in row order.
    pub fn select(&self, conditions: &Where) -> TableResult<RowSet> {
        let rows = self.state.read().store.filter(conditions);
        if rows.is_empty() {
            return Err(TableError::NotFound);
        }
        Ok(rows)
    }

    /// Get a copy of the first row matching `conditions`.
    pub fn select_any(&self, conditions: &Where) -> TableResult<Row> {
        self.state
            .read()
            .store
            .first(conditions)
            .ok_or(TableError::NotFound)
    }

    // ========== Internal ==========

    fn upsert_locked(&self, state: &mut TableState, rows: RowSet) -> TableResult<usize> {
        let count = rows.len();
        let mut candidate = state.store.copy();
        state.store.merge(&mut candidate, rows);
        self.commit(state, candidate)?;
        Ok(count)
    }

    /// Validate, notify triggers, then swap in the candidate rows.
    fn commit(&self, state: &mut TableState, rows: RowSet) -> TableResult<()> {
        if let Err(err) = self.validators.validate(&rows) {
            log::debug!("commit rejected: {}", err);
            return Err(err.into());
        }

        let events = state
            .triggers
            .dispatch(state.store.primary_key(), &rows, state.store.rows())
            .map_err(|err| {
                log::debug!("commit aborted by trigger: {}", err);
                err
            })?;

        log::trace!("commit: {} row(s), {} event(s)", rows.len(), events);
        state.store.replace(rows);
        Ok(())
    }
}
