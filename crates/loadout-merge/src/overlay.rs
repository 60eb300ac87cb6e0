//! Recursive override overlay.
//!
//! Leaf overrides (scalars and lists) replace the value at an existing key.
//! Nested overrides descend into the existing sub-record, so sibling fields
//! the patch does not mention are kept. Array targets are addressed by
//! decimal index keys. Keys are never inserted: an override aimed at a key
//! the target lacks is reported and dropped.

use loadout_types::{OverrideTree, OverrideValue};
use serde::Serialize;
use serde_json::Value;

/// A problem found while applying one override. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayIssue {
    /// The target has no value at this path.
    MissingKey { path: String },
    /// A nested override points at a scalar.
    NotAContainer { path: String },
}

impl OverlayIssue {
    /// Dotted path of the dropped override.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingKey { path } | Self::NotAContainer { path } => path,
        }
    }
}

/// Apply `overrides` to `target` in place, returning every dropped override.
pub fn overlay(target: &mut Value, overrides: &OverrideTree) -> Vec<OverlayIssue> {
    let mut issues = Vec::new();
    overlay_at(target, overrides, "", &mut issues);
    issues
}

fn overlay_at(target: &mut Value, overrides: &OverrideTree, path: &str, issues: &mut Vec<OverlayIssue>) {
    for (key, value) in overrides {
        let child_path = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };

        let Some(slot) = child_mut(target, key) else {
            issues.push(OverlayIssue::MissingKey { path: child_path });
            continue;
        };

        match value {
            OverrideValue::Nested(tree) => {
                if slot.is_object() || slot.is_array() {
                    overlay_at(slot, tree, &child_path, issues);
                } else {
                    issues.push(OverlayIssue::NotAContainer { path: child_path });
                }
            }
            leaf => *slot = leaf.to_value(),
        }
    }
}

fn child_mut<'v>(target: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    match target {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_types::overrides::tree_from_map;
    use proptest::prelude::*;
    use serde_json::{json, Map};

    fn tree(value: Value) -> OverrideTree {
        serde_json::from_value(value).unwrap()
    }

    fn template() -> Value {
        json!({
            "_id": "base",
            "_name": "weapon_base",
            "_props": {
                "Weight": 3.4,
                "Ergonomics": 40,
                "CanSellOnRagfair": true,
                "Prefab": {"path": "assets/base.bundle", "rcid": ""},
                "Slots": [
                    {"_name": "mod_stock", "_props": {"filters": [{"Filter": ["stock_a"]}]}}
                ]
            }
        })
    }

    #[test]
    fn replaces_scalars_at_existing_keys() {
        let mut t = template();
        let issues = overlay(&mut t, &tree(json!({"_props": {"Weight": 2.0, "CanSellOnRagfair": false}})));

        assert!(issues.is_empty());
        assert_eq!(t["_props"]["Weight"], json!(2.0));
        assert_eq!(t["_props"]["CanSellOnRagfair"], json!(false));
        assert_eq!(t["_props"]["Ergonomics"], json!(40));
    }

    #[test]
    fn nested_records_merge_not_replace() {
        let mut t = template();
        overlay(&mut t, &tree(json!({"_props": {"Prefab": {"path": "assets/sand.bundle"}}})));

        assert_eq!(t["_props"]["Prefab"]["path"], json!("assets/sand.bundle"));
        assert_eq!(t["_props"]["Prefab"]["rcid"], json!(""));
    }

    #[test]
    fn arrays_replace_atomically() {
        let mut t = template();
        overlay(&mut t, &tree(json!({"_props": {"Slots": []}})));
        assert_eq!(t["_props"]["Slots"], json!([]));
    }

    #[test]
    fn array_elements_addressed_by_index() {
        let mut t = template();
        let issues = overlay(
            &mut t,
            &tree(json!({"_props": {"Slots": {"0": {"_name": "mod_stock_renamed"}}}})),
        );

        assert!(issues.is_empty());
        assert_eq!(t["_props"]["Slots"][0]["_name"], json!("mod_stock_renamed"));
        assert_eq!(t["_props"]["Slots"][0]["_props"]["filters"][0]["Filter"], json!(["stock_a"]));
    }

    #[test]
    fn missing_keys_are_reported_not_inserted() {
        let mut t = template();
        let before = t.clone();
        let issues = overlay(&mut t, &tree(json!({"_props": {"Recoil": 50}, "_extra": "x"})));

        assert_eq!(t, before);
        assert_eq!(
            issues,
            vec![
                OverlayIssue::MissingKey { path: "_extra".into() },
                OverlayIssue::MissingKey { path: "_props.Recoil".into() },
            ]
        );
    }

    #[test]
    fn missing_nested_target_drops_subtree() {
        let mut t = template();
        let issues = overlay(&mut t, &tree(json!({"_props": {"Grips": {"x": 1}}})));
        assert_eq!(issues, vec![OverlayIssue::MissingKey { path: "_props.Grips".into() }]);
    }

    #[test]
    fn nested_override_on_scalar_is_reported() {
        let mut t = template();
        let issues = overlay(&mut t, &tree(json!({"_props": {"Weight": {"x": 1}}})));

        assert_eq!(issues[0].path(), "_props.Weight");
        assert!(matches!(issues[0], OverlayIssue::NotAContainer { .. }));
        assert_eq!(t["_props"]["Weight"], json!(3.4));
    }

    #[test]
    fn out_of_range_index_is_missing() {
        let mut t = template();
        let issues = overlay(&mut t, &tree(json!({"_props": {"Slots": {"3": {"_name": "x"}}}})));
        assert_eq!(issues, vec![OverlayIssue::MissingKey { path: "_props.Slots.3".into() }]);
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-d]", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map("[a-d]", arb_json(), 0..5).prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn overlaying_a_template_onto_itself_is_a_no_op(target in arb_object()) {
            let overrides = tree_from_map(target.clone(), "").unwrap();
            let mut value = Value::Object(target.clone());
            let issues = overlay(&mut value, &overrides);
            prop_assert!(issues.is_empty());
            prop_assert_eq!(value, Value::Object(target));
        }

        #[test]
        fn overlay_is_idempotent(target in arb_object(), patch in arb_object()) {
            let overrides = tree_from_map(patch, "").unwrap();
            let mut once = Value::Object(target);
            overlay(&mut once, &overrides);
            let mut twice = once.clone();
            overlay(&mut twice, &overrides);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn overlay_never_changes_top_level_keys(target in arb_object(), patch in arb_object()) {
            let overrides = tree_from_map(patch, "").unwrap();
            let keys: Vec<String> = target.keys().cloned().collect();
            let mut value = Value::Object(target);
            overlay(&mut value, &overrides);
            let after: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
            prop_assert_eq!(keys, after);
        }
    }
}
