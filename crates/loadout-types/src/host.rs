//! Host database tables.
//!
//! Only the tables the merge touches are typed. Item templates stay raw JSON
//! because their shape varies by item category, and every record keeps its
//! unknown fields in a flattened `extra` map so a load/merge/save round trip
//! never drops data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Language code -> (string key -> localized text).
pub type Locales = BTreeMap<String, BTreeMap<String, String>>;

/// The server-owned database the merge mutates in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostDatabase {
    #[serde(default)]
    pub templates: Templates,
    #[serde(default)]
    pub locales: LocaleTables,
    #[serde(default)]
    pub traders: BTreeMap<String, Trader>,
    #[serde(default)]
    pub globals: Globals,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HostDatabase {
    /// Look up an item template by id.
    pub fn item(&self, id: &str) -> Option<&Value> {
        self.templates.items.get(id)
    }

    /// Language codes present in the global locale table.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.global.keys().map(String::as_str)
    }
}

/// `templates.*`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default)]
    pub items: BTreeMap<String, Value>,
    #[serde(default)]
    pub handbook: Handbook,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `templates.handbook`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Handbook {
    #[serde(rename = "Items", default)]
    pub items: Vec<HandbookEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One catalog/pricing row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandbookEntry {
    pub id: String,
    pub parent_id: String,
    pub price: i64,
}

/// `locales.*`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleTables {
    #[serde(default)]
    pub global: Locales,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `traders[id]`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    #[serde(default)]
    pub assort: TraderAssort,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A trader's for-sale items with their pricing and loyalty requirements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderAssort {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub barter_scheme: BTreeMap<String, Value>,
    #[serde(default)]
    pub loyal_level_items: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `globals.*`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Globals {
    #[serde(default)]
    pub config: GlobalsConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `globals.config.*`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalsConfig {
    #[serde(rename = "Mastering", default)]
    pub mastering: Vec<MasteryRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A weapon-mastery progression record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MasteryRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Templates", default)]
    pub templates: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "templates": {
                "items": {"a": {"_id": "a", "_props": {}}},
                "handbook": {
                    "Categories": [{"Id": "cat"}],
                    "Items": [{"Id": "a", "ParentId": "cat", "Price": 100}]
                },
                "quests": {}
            },
            "locales": {"global": {"en": {"a Name": "A"}}, "menu": {}},
            "traders": {"t1": {"base": {"nickname": "T"}, "assort": {"items": [], "barter_scheme": {}, "loyal_level_items": {}}}},
            "globals": {"config": {"Mastering": [{"Name": "AK74", "Templates": ["x"], "Level2": 750}], "exp": 1}},
            "bots": {}
        })
    }

    #[test]
    fn parses_known_tables() {
        let db: HostDatabase = serde_json::from_value(sample()).unwrap();
        assert!(db.item("a").is_some());
        assert_eq!(db.templates.handbook.items[0].price, 100);
        assert_eq!(db.languages().collect::<Vec<_>>(), vec!["en"]);
        assert_eq!(db.globals.config.mastering[0].name, "AK74");
        assert!(db.traders.contains_key("t1"));
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let db: HostDatabase = serde_json::from_value(sample()).unwrap();
        assert!(db.extra.contains_key("bots"));
        assert!(db.templates.extra.contains_key("quests"));
        assert!(db.globals.config.mastering[0].extra.contains_key("Level2"));

        let back = serde_json::to_value(&db).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn missing_tables_default_to_empty() {
        let db: HostDatabase = serde_json::from_value(json!({})).unwrap();
        assert!(db.templates.items.is_empty());
        assert!(db.locales.global.is_empty());
        assert!(db.globals.config.mastering.is_empty());
    }
}
