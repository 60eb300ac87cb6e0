//! Building a new template from a clone source.

use loadout_types::{template, PatchItem};
use serde_json::Value;

use crate::overlay::{overlay, OverlayIssue};
use crate::report::Diagnostic;

/// Copy `source`, give it `id`, and apply the item's overrides,
/// compatibilities, and conflicts.
///
/// Returns the finished template and the diagnostics raised while building
/// it. The host database is not touched.
pub fn build_clone(source: &Value, id: &str, item: &PatchItem) -> (Value, Vec<Diagnostic>) {
    let mut clone = source.clone();
    template::set_id(&mut clone, id);

    let mut diagnostics: Vec<Diagnostic> = overlay(&mut clone, &item.items)
        .into_iter()
        .map(|issue| match issue {
            OverlayIssue::MissingKey { path } => Diagnostic::MissingOverrideTarget {
                item: id.to_string(),
                path,
            },
            OverlayIssue::NotAContainer { path } => Diagnostic::OverrideTargetNotContainer {
                item: id.to_string(),
                path,
            },
        })
        .collect();

    for (slot_name, ids) in &item.sc_compatibilities {
        let mut matched = false;
        for slot in template::slot_group_mut(&mut clone, "Slots") {
            if template::slot_name(slot) != Some(slot_name.as_str()) {
                continue;
            }
            matched = true;
            match template::first_filter_mut(slot) {
                Some(filter) => filter.extend(ids.iter().cloned().map(Value::String)),
                None => diagnostics.push(Diagnostic::MissingSlotFilter {
                    item: id.to_string(),
                    slot: slot_name.clone(),
                }),
            }
        }
        if !matched {
            diagnostics.push(Diagnostic::UnknownCompatibilitySlot {
                item: id.to_string(),
                slot: slot_name.clone(),
            });
        }
    }

    if !item.sc_conflicts.is_empty() {
        match template::conflicting_items_or_default(&mut clone) {
            Some(conflicts) => conflicts.extend(item.sc_conflicts.iter().cloned().map(Value::String)),
            None => diagnostics.push(Diagnostic::MissingConflictList { item: id.to_string() }),
        }
    }

    (clone, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rifle() -> Value {
        json!({
            "_id": "base_weapon",
            "_props": {
                "Weight": 3.0,
                "Slots": [
                    {"_name": "mod_stock", "_props": {"filters": [{"Filter": ["stock_a"]}]}},
                    {"_name": "mod_scope", "_props": {"filters": [{"Filter": []}]}},
                    {"_name": "mod_tactical", "_props": {}}
                ],
                "ConflictingItems": ["c0"]
            }
        })
    }

    fn item(value: Value) -> PatchItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn clone_gets_new_id_and_overrides() {
        let patch = item(json!({"enable": true, "clone": "base_weapon", "items": {"_props": {"Weight": 2.5}}}));
        let (clone, diags) = build_clone(&rifle(), "new_weapon", &patch);

        assert!(diags.is_empty());
        assert_eq!(clone["_id"], json!("new_weapon"));
        assert_eq!(clone["_props"]["Weight"], json!(2.5));
    }

    #[test]
    fn source_template_is_untouched() {
        let source = rifle();
        let patch = item(json!({
            "clone": "base_weapon",
            "items": {"_props": {"Weight": 9}},
            "scCompatibilities": {"mod_stock": ["stock_b"]}
        }));
        build_clone(&source, "new_weapon", &patch);
        assert_eq!(source, rifle());
    }

    #[test]
    fn compatibilities_extend_named_slot_filters() {
        let patch = item(json!({
            "clone": "base_weapon",
            "scCompatibilities": {"mod_stock": ["stock_b", "stock_c"], "mod_scope": ["scope_a"]}
        }));
        let (clone, diags) = build_clone(&rifle(), "new_weapon", &patch);

        assert!(diags.is_empty());
        let slots = &clone["_props"]["Slots"];
        assert_eq!(slots[0]["_props"]["filters"][0]["Filter"], json!(["stock_a", "stock_b", "stock_c"]));
        assert_eq!(slots[1]["_props"]["filters"][0]["Filter"], json!(["scope_a"]));
    }

    #[test]
    fn unknown_slot_and_missing_filter_are_reported() {
        let patch = item(json!({
            "clone": "base_weapon",
            "scCompatibilities": {"mod_barrel": ["b"], "mod_tactical": ["t"]}
        }));
        let (_, diags) = build_clone(&rifle(), "new_weapon", &patch);

        assert_eq!(
            diags,
            vec![
                Diagnostic::UnknownCompatibilitySlot { item: "new_weapon".into(), slot: "mod_barrel".into() },
                Diagnostic::MissingSlotFilter { item: "new_weapon".into(), slot: "mod_tactical".into() },
            ]
        );
    }

    #[test]
    fn conflicts_are_appended() {
        let patch = item(json!({"clone": "base_weapon", "scConflicts": ["c1", "c2"]}));
        let (clone, _) = build_clone(&rifle(), "new_weapon", &patch);
        assert_eq!(clone["_props"]["ConflictingItems"], json!(["c0", "c1", "c2"]));
    }

    #[test]
    fn conflicts_created_when_absent() {
        let source = json!({"_id": "s", "_props": {}});
        let patch = item(json!({"clone": "s", "scConflicts": ["c1"]}));
        let (clone, diags) = build_clone(&source, "n", &patch);

        assert!(diags.is_empty());
        assert_eq!(clone["_props"]["ConflictingItems"], json!(["c1"]));
    }

    #[test]
    fn missing_override_targets_become_diagnostics() {
        let patch = item(json!({"clone": "base_weapon", "items": {"_props": {"Recoil": 1}}}));
        let (clone, diags) = build_clone(&rifle(), "new_weapon", &patch);

        assert!(clone["_props"].get("Recoil").is_none());
        assert_eq!(
            diags,
            vec![Diagnostic::MissingOverrideTarget { item: "new_weapon".into(), path: "_props.Recoil".into() }]
        );
    }
}
