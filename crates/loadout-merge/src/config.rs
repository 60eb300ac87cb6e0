use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};

/// Configuration for a merge pass, usually read from `loadout.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Folder name of the mod under the server's mods root.
    pub mod_name: String,
    /// When `true`, disabled items are still localized and propagated into
    /// other templates' filter and conflict lists. Cloning stays gated.
    pub ungated_side_effects: bool,
    /// Trader alias -> trader id. Only these traders' assorts are merged.
    pub traders: BTreeMap<String, String>,
    /// Template ids appended to weapon-mastery records, by weapon name.
    pub mastery: Vec<MasteryExtension>,
}

/// Template ids appended to every mastery record named `weapon`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryExtension {
    pub weapon: String,
    pub templates: Vec<String>,
}

impl MasteryExtension {
    pub fn new(weapon: &str, templates: &[&str]) -> Self {
        Self {
            weapon: weapon.to_string(),
            templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            mod_name: "loadout".into(),
            ungated_side_effects: false,
            traders: BTreeMap::from([("painter".into(), "668aaff35fd574b6dcc4a686".into())]),
            mastery: vec![
                MasteryExtension::new("MCX", &["SC_0101_MCX_SAND"]),
                MasteryExtension::new("M4", &["SC_0102_M4A1_SAND", "SC_0108_HK416_SAND"]),
                MasteryExtension::new(
                    "AK74",
                    &[
                        "SC_0103_AK101_SAND",
                        "SC_0104_AK102_SAND",
                        "SC_0105_AK103_SAND",
                        "SC_0106_AK104_SAND",
                        "SC_0107_AK105_SAND",
                    ],
                ),
            ],
        }
    }
}

impl MergeConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> MergeResult<Self> {
        toml::from_str(text).map_err(|e| MergeError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> MergeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Read `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> MergeResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> MergeResult<String> {
        toml::to_string_pretty(self).map_err(|e| MergeError::Config(e.to_string()))
    }
}
