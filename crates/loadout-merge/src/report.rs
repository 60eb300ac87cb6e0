//! Merge diagnostics and the per-pass report.

use std::fmt;

use serde::Serialize;
use tracing::{error, warn};

/// How serious a diagnostic is. Neither level aborts the pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Part of an item was dropped; the item itself was still merged.
    Warning,
    /// A whole item or trader was skipped.
    Error,
}

/// A non-fatal problem found during the pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An override named a key the cloned template does not have.
    MissingOverrideTarget { item: String, path: String },
    /// A nested override pointed at a scalar.
    OverrideTargetNotContainer { item: String, path: String },
    /// The template named by `clone` does not exist; the item was skipped.
    MissingCloneSource { item: String, source_id: String },
    /// `scCompatibilities` named a slot the clone does not have.
    UnknownCompatibilitySlot { item: String, slot: String },
    /// A slot exists but has no `filters[0].Filter` list.
    MissingSlotFilter { item: String, slot: String },
    /// The clone has no `_props` record to hold `ConflictingItems`.
    MissingConflictList { item: String },
    /// An enabled item has no handbook metadata; no handbook entry was added.
    MissingHandbook { item: String },
    /// An item has no locale strings; nothing was localized.
    MissingLocales { item: String },
    /// The new id already named a host template, which was overwritten.
    IdCollision { item: String },
    /// A configured trader is absent from the host database.
    MissingHostTrader { trader: String },
    /// A configured trader has no assort in the patch set.
    MissingPatchTrader { trader: String },
}

impl Diagnostic {
    /// The severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingCloneSource { .. }
            | Self::MissingHostTrader { .. }
            | Self::MissingPatchTrader { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOverrideTarget { item, path } => {
                write!(f, "{item}: attribute {path:?} not found, using default value instead")
            }
            Self::OverrideTargetNotContainer { item, path } => {
                write!(f, "{item}: attribute {path:?} is not a record, nested override ignored")
            }
            Self::MissingCloneSource { item, source_id } => {
                write!(f, "{item}: clone source {source_id:?} not found, item skipped")
            }
            Self::UnknownCompatibilitySlot { item, slot } => {
                write!(f, "{item}: no slot named {slot:?}")
            }
            Self::MissingSlotFilter { item, slot } => {
                write!(f, "{item}: slot {slot:?} has no filter list")
            }
            Self::MissingConflictList { item } => {
                write!(f, "{item}: template has no _props, conflicts not added")
            }
            Self::MissingHandbook { item } => write!(f, "{item}: no handbook metadata"),
            Self::MissingLocales { item } => write!(f, "{item}: no locale strings"),
            Self::IdCollision { item } => write!(f, "{item}: overwrote an existing host template"),
            Self::MissingHostTrader { trader } => write!(f, "trader {trader} not in host database"),
            Self::MissingPatchTrader { trader } => write!(f, "trader {trader} has no patch assort"),
        }
    }
}

/// What one merge pass did.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MergeReport {
    /// Ids cloned and registered, in pass order.
    pub cloned: Vec<String>,
    /// Ids skipped because `enable` was false.
    pub disabled: Vec<String>,
    /// Ids skipped because of an error.
    pub failed: Vec<String>,
    /// Filter and conflict lists the new ids were appended to.
    pub propagated: usize,
    /// Languages written, summed over items.
    pub localized: usize,
    /// Trader offers appended.
    pub trader_items: usize,
    /// Mastery template ids appended.
    pub mastery_templates: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl MergeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => error!("{diagnostic}"),
            Severity::Warning => warn!("{diagnostic}"),
        }
        self.diagnostics.push(diagnostic);
    }

    /// Number of diagnostics at [`Severity::Error`].
    pub fn errors(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    /// Number of diagnostics at [`Severity::Warning`].
    pub fn warnings(&self) -> usize {
        self.diagnostics.len() - self.errors()
    }

    /// Returns `true` if the pass produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_split() {
        let mut report = MergeReport::new();
        report.record(Diagnostic::MissingHandbook { item: "a".into() });
        report.record(Diagnostic::MissingCloneSource {
            item: "b".into(),
            source_id: "ghost".into(),
        });

        assert_eq!(report.errors(), 1);
        assert_eq!(report.warnings(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn display_names_item_and_path() {
        let d = Diagnostic::MissingOverrideTarget {
            item: "new_weapon".into(),
            path: "_props.Recoil".into(),
        };
        assert_eq!(
            d.to_string(),
            "new_weapon: attribute \"_props.Recoil\" not found, using default value instead"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let d = Diagnostic::MissingHostTrader { trader: "t".into() };
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["kind"], "missing_host_trader");
        assert_eq!(v["trader"], "t");
    }
}
