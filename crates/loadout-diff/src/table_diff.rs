//! Key-level diff of two JSON tables.
//!
//! Tables are represented as `BTreeMap<String, serde_json::Value>`. The diff
//! detects key additions, removals, and value modifications; modifications
//! carry the dotted paths of the leaves that differ.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// The result of comparing two tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableDiff {
    /// The list of table changes, in key order.
    pub changes: Vec<TableChange>,
}

impl TableDiff {
    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of added keys.
    pub fn additions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, TableChange::Added { .. }))
            .count()
    }

    /// Number of removed keys.
    pub fn removals(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, TableChange::Removed { .. }))
            .count()
    }

    /// Number of modified keys.
    pub fn modifications(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, TableChange::Modified { .. }))
            .count()
    }
}

/// A single change in a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableChange {
    /// A new key was added.
    Added { key: String },
    /// An existing key was removed.
    Removed { key: String },
    /// An existing key's value changed at the listed leaf paths.
    Modified { key: String, paths: Vec<String> },
}

impl TableChange {
    /// The table key this change refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::Added { key } | Self::Removed { key } | Self::Modified { key, .. } => key,
        }
    }
}

/// Compute the diff between two tables.
///
/// Keys present only in `new` are `Added`, keys present only in `old` are
/// `Removed`, and keys present in both but with different values are `Modified`.
pub fn diff_tables(old: &BTreeMap<String, Value>, new: &BTreeMap<String, Value>) -> TableDiff {
    let mut changes = Vec::new();

    for (key, old_val) in old {
        match new.get(key) {
            Some(new_val) => {
                if old_val != new_val {
                    changes.push(TableChange::Modified {
                        key: key.clone(),
                        paths: diff_values(old_val, new_val),
                    });
                }
            }
            None => changes.push(TableChange::Removed { key: key.clone() }),
        }
    }

    for key in new.keys() {
        if !old.contains_key(key) {
            changes.push(TableChange::Added { key: key.clone() });
        }
    }

    changes.sort_by(|a, b| a.key().cmp(b.key()));
    TableDiff { changes }
}

/// Dotted paths of the leaves that differ between two values.
///
/// Objects are compared key by key. Arrays and scalars are compared as a
/// whole, matching how overrides replace them.
pub fn diff_values(old: &Value, new: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    walk("", old, new, &mut paths);
    paths
}

fn walk(path: &str, old: &Value, new: &Value, out: &mut Vec<String>) {
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => {
            for (key, av) in a {
                let child = join(path, key);
                match b.get(key) {
                    Some(bv) => walk(&child, av, bv, out),
                    None => out.push(child),
                }
            }
            for key in b.keys() {
                if !a.contains_key(key) {
                    out.push(join(path, key));
                }
            }
        }
        _ if old != new => out.push(if path.is_empty() { "<root>".into() } else { path.to_string() }),
        _ => {}
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
