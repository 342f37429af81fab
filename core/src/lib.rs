//! STable Core Types
//!
//! This crate provides the foundational types used throughout STable:
//! - Rows (field name to string value maps) and row sets
//! - Field access helpers that treat absent fields as empty
//! - The `Operation` tag delivered to triggers

mod operation;
mod row;

pub use operation::*;
pub use row::*;
