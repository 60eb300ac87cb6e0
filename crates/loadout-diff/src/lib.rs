//! Table diffing for Loadout.
//!
//! Compares two keyed JSON tables (for example `templates.items` before and
//! after a merge pass) and reports which keys were added, removed, or
//! modified, down to the dotted paths of changed leaves.
//!
//! # Key Types
//!
//! - [`TableDiff`] / [`TableChange`] -- key-level diff of a `BTreeMap<String, Value>`
//! - [`diff_values`] -- leaf-path diff of two JSON values

pub mod table_diff;

pub use table_diff::{diff_tables, diff_values, TableChange, TableDiff};
