//! Patch records: the content injected into the host database.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::host::TraderAssort;
use crate::overrides::OverrideTree;

/// The read-only content set loaded from a mod's database directory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchDatabase {
    #[serde(default)]
    pub items: BTreeMap<String, PatchItem>,
    #[serde(default)]
    pub traders: BTreeMap<String, PatchTrader>,
}

impl PatchDatabase {
    /// Returns `true` if `id` names a patch item, enabled or not.
    pub fn contains_item(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Iterate over enabled items only.
    pub fn enabled_items(&self) -> impl Iterator<Item = (&String, &PatchItem)> {
        self.items.iter().filter(|(_, item)| item.enable)
    }
}

/// A new item, described as a clone of an existing template plus overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchItem {
    /// Disabled items are inert.
    #[serde(default)]
    pub enable: bool,
    /// Id of the host template to copy.
    #[serde(rename = "clone")]
    pub source: String,
    /// Field overrides applied to the copy.
    #[serde(default)]
    pub items: OverrideTree,
    /// Slot name -> ids to add to that slot's filter on the copy.
    #[serde(default)]
    pub sc_compatibilities: BTreeMap<String, Vec<String>>,
    /// Ids appended to the copy's conflicting-items list.
    #[serde(default)]
    pub sc_conflicts: Vec<String>,
    #[serde(default)]
    pub handbook: Option<HandbookMeta>,
    #[serde(default)]
    pub locales: Option<LocaleStrings>,
}

/// Handbook placement for a new item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandbookMeta {
    pub parent_id: String,
    pub price: i64,
}

/// Display strings for a new item, written verbatim into every language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocaleStrings {
    pub name: String,
    pub shortname: String,
    pub description: String,
}

/// `traders[id]` in a patch set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchTrader {
    #[serde(default)]
    pub assort: TraderAssort,
}
