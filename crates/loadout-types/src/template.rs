//! Accessors for raw item templates.
//!
//! Templates are kept as `serde_json::Value`. These helpers locate the few
//! places the merge edits: the `_id`, the slot-like lists under `_props`
//! (`Slots`, `Chambers`, `Cartridges`), each entry's first filter list, and
//! the `ConflictingItems` list.

use serde_json::{Map, Value};

/// The `_props` lists whose entries carry filter lists.
pub const SLOT_GROUPS: [&str; 3] = ["Slots", "Chambers", "Cartridges"];

/// Set the template's `_id`. No-op on non-object templates.
pub fn set_id(template: &mut Value, id: &str) {
    if let Some(map) = template.as_object_mut() {
        map.insert("_id".into(), Value::String(id.to_string()));
    }
}

/// The template's `_props` record.
pub fn props_mut(template: &mut Value) -> Option<&mut Map<String, Value>> {
    template.get_mut("_props")?.as_object_mut()
}

/// Entries of one slot group (`Slots`, `Chambers` or `Cartridges`).
///
/// Yields nothing if the group is absent.
pub fn slot_group_mut<'a>(
    template: &'a mut Value,
    group: &str,
) -> impl Iterator<Item = &'a mut Value> {
    props_mut(template)
        .and_then(|props| props.get_mut(group))
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
}

/// Entries across all three slot groups.
pub fn all_slots_mut(template: &mut Value) -> impl Iterator<Item = &mut Value> {
    let Some(props) = props_mut(template) else {
        return Vec::new().into_iter();
    };
    props
        .iter_mut()
        .filter(|(key, _)| SLOT_GROUPS.contains(&key.as_str()))
        .filter_map(|(_, group)| group.as_array_mut())
        .flatten()
        .collect::<Vec<_>>()
        .into_iter()
}

/// A slot entry's `_name`.
pub fn slot_name(slot: &Value) -> Option<&str> {
    slot.get("_name")?.as_str()
}

/// A slot entry's first filter list: `_props.filters[0].Filter`.
pub fn first_filter_mut(slot: &mut Value) -> Option<&mut Vec<Value>> {
    slot.get_mut("_props")?
        .get_mut("filters")?
        .get_mut(0)?
        .get_mut("Filter")?
        .as_array_mut()
}

/// The template's `_props.ConflictingItems` list.
pub fn conflicting_items_mut(template: &mut Value) -> Option<&mut Vec<Value>> {
    props_mut(template)?.get_mut("ConflictingItems")?.as_array_mut()
}

/// The template's `_props.ConflictingItems` list, created empty if absent.
pub fn conflicting_items_or_default(template: &mut Value) -> Option<&mut Vec<Value>> {
    props_mut(template)?
        .entry("ConflictingItems")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
}

/// Returns `true` if `list` holds the string `id`.
pub fn contains_id(list: &[Value], id: &str) -> bool {
    list.iter().any(|v| v.as_str() == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weapon() -> Value {
        json!({
            "_id": "w",
            "_props": {
                "Slots": [
                    {"_name": "mod_stock", "_props": {"filters": [{"Filter": ["stock_a"]}]}},
                    {"_name": "mod_magazine", "_props": {"filters": []}}
                ],
                "Chambers": [
                    {"_name": "patron_in_weapon", "_props": {"filters": [{"Filter": ["ammo_a"]}]}}
                ],
                "ConflictingItems": ["c1"]
            }
        })
    }

    #[test]
    fn set_id_overwrites() {
        let mut t = weapon();
        set_id(&mut t, "new");
        assert_eq!(t["_id"], json!("new"));
    }

    #[test]
    fn slot_group_lookup() {
        let mut t = weapon();
        let names: Vec<_> = slot_group_mut(&mut t, "Slots")
            .map(|s| slot_name(s).unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["mod_stock", "mod_magazine"]);
        assert_eq!(slot_group_mut(&mut t, "Cartridges").count(), 0);
    }

    #[test]
    fn all_slots_spans_groups() {
        let mut t = weapon();
        assert_eq!(all_slots_mut(&mut t).count(), 3);
        assert_eq!(all_slots_mut(&mut json!({"_id": "bare"})).count(), 0);
    }

    #[test]
    fn first_filter_present_and_missing() {
        let mut t = weapon();
        let mut slots = slot_group_mut(&mut t, "Slots");
        let stock = slots.next().unwrap();
        assert_eq!(first_filter_mut(stock).unwrap(), &vec![json!("stock_a")]);
        let magazine = slots.next().unwrap();
        assert!(first_filter_mut(magazine).is_none());
    }

    #[test]
    fn conflicting_items_access() {
        let mut t = weapon();
        assert!(contains_id(conflicting_items_mut(&mut t).unwrap(), "c1"));

        let mut bare = json!({"_props": {}});
        assert!(conflicting_items_mut(&mut bare).is_none());
        conflicting_items_or_default(&mut bare).unwrap().push(json!("x"));
        assert_eq!(bare["_props"]["ConflictingItems"], json!(["x"]));
    }
}
