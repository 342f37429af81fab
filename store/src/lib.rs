//! STable Store
//!
//! Hold the authoritative row set and the primitives mutations build on.
//!
//! Responsibilities:
//! - Hand out deep copies so working rows never alias stored rows
//! - Filter by exact-match conditions, preserving row order
//! - Merge incoming rows by primary key (field-level upsert)
//! - Remove rows by primary key
//! - Replace the whole row set at commit

mod store;

pub use store::RowStore;
