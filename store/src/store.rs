//! The authoritative row collection.

use stable_core::{apply_fields, field_value, matches_where, Row, RowSet, Where};

/// Row storage keyed by a primary key field.
///
/// The store never validates. Callers build a candidate row set from the
/// primitives here, check it, then hand it back through [`RowStore::replace`].
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    primary_key: String,
    rows: RowSet,
}

impl RowStore {
    /// Create an empty store.
    pub fn new(primary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
            rows: RowSet::new(),
        }
    }

    /// Get the primary key field name.
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Get the primary key value of a row (empty if absent).
    pub fn key_of<'a>(&self, row: &'a Row) -> &'a str {
        field_value(row, &self.primary_key)
    }

    /// Borrow the stored rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Deep copy of every stored row.
    pub fn copy(&self) -> RowSet {
        self.rows.clone()
    }

    /// Copies of the rows matching every condition, in stored order.
    pub fn filter(&self, conditions: &Where) -> RowSet {
        if conditions.is_empty() {
            return self.copy();
        }
        self.rows
            .iter()
            .filter(|row| matches_where(row, conditions))
            .cloned()
            .collect()
    }

    /// Copy of the first row matching every condition.
    pub fn first(&self, conditions: &Where) -> Option<Row> {
        self.rows
            .iter()
            .find(|row| matches_where(row, conditions))
            .cloned()
    }

    /// Merge incoming rows into `base` by primary key.
    ///
    /// A matched row receives only the fields present in the incoming row and
    /// keeps its position; an unmatched row is appended. Each incoming row sees
    /// the effect of the ones before it.
    pub fn merge(&self, base: &mut RowSet, incoming: impl IntoIterator<Item = Row>) {
        for row in incoming {
            match self.position(base, self.key_of(&row)) {
                Some(pos) => apply_fields(&mut base[pos], &row),
                None => base.push(row),
            }
        }
    }

    /// Remove from `base` the first row sharing each deleted row's primary key.
    ///
    /// Keys not present in `base` are ignored.
    pub fn delete_by_key(&self, base: &mut RowSet, to_delete: &[Row]) {
        for row in to_delete {
            if let Some(pos) = self.position(base, self.key_of(row)) {
                base.remove(pos);
            }
        }
    }

    fn position(&self, rows: &[Row], key: &str) -> Option<usize> {
        rows.iter().position(|row| self.key_of(row) == key)
    }

    /// Swap in a new authoritative row set.
    pub fn replace(&mut self, rows: RowSet) {
        self.rows = rows;
    }
}
