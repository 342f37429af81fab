//! Row types for STable.
//!
//! A row maps field names to string values. There is no schema: any row may
//! carry any field, and the only typed value is the string.

use std::collections::BTreeMap;

/// A single table row.
///
/// Two rows are equal when they hold the same set of fields with the same
/// values. Field order is irrelevant.
pub type Row = BTreeMap<String, String>;

/// An ordered sequence of rows.
pub type RowSet = Vec<Row>;

/// Exact-match conditions: every listed field must be present with the given value.
pub type Where = Row;

/// Get a field value, treating an absent field as the empty string.
pub fn field_value<'a>(row: &'a Row, field: &str) -> &'a str {
    row.get(field).map(String::as_str).unwrap_or("")
}

/// Check whether a row satisfies every condition in `conditions`.
///
/// A field named in `conditions` must be present in the row; an absent field
/// never matches, not even against an empty value. No conditions match every row.
pub fn matches_where(row: &Row, conditions: &Where) -> bool {
    conditions
        .iter()
        .all(|(field, value)| row.get(field).is_some_and(|v| v == value))
}

/// Overwrite the fields present in `patch` onto `row`, leaving other fields untouched.
pub fn apply_fields(row: &mut Row, patch: &Row) {
    for (field, value) in patch {
        row.insert(field.clone(), value.clone());
    }
}

/// Create a row from `field => value` pairs.
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut row = $crate::Row::new();
            $(
                row.insert($key.to_string(), $value.to_string());
            )+
            row
        }
    };
}
