//! Compatibility and conflict propagation.
//!
//! A new item should be accepted and rejected wherever its clone source
//! already is. For every host template outside the patch set, each slot,
//! chamber, and cartridge filter that lists the source gains the new id, and
//! so does a conflict list that names the source. The source stays in place.

use std::collections::BTreeMap;

use loadout_types::{template, PatchDatabase};
use serde_json::Value;
use tracing::debug;

/// Add `new_id` next to `source_id` across `items`, skipping patch templates.
///
/// Returns the number of lists that were extended.
pub fn propagate_compatibility(
    items: &mut BTreeMap<String, Value>,
    patch: &PatchDatabase,
    source_id: &str,
    new_id: &str,
) -> usize {
    let mut extended = 0;

    for (id, item) in items.iter_mut() {
        if patch.contains_item(id) {
            continue;
        }

        for slot in template::all_slots_mut(item) {
            if let Some(filter) = template::first_filter_mut(slot) {
                extended += append_beside(filter, source_id, new_id);
            }
        }

        if let Some(conflicts) = template::conflicting_items_mut(item) {
            extended += append_beside(conflicts, source_id, new_id);
        }
    }

    debug!(source = source_id, item = new_id, lists = extended, "propagated compatibility");
    extended
}

/// Appends `new_id` at most once per list, however often `source_id` occurs.
fn append_beside(list: &mut Vec<Value>, source_id: &str, new_id: &str) -> usize {
    if template::contains_id(list, source_id) {
        list.push(Value::String(new_id.to_string()));
        1
    } else {
        0
    }
}
