//! The content merger: one pass of a patch set over a host database.

use loadout_types::{HandbookEntry, HostDatabase, LocaleStrings, PatchDatabase, PatchItem};
use tracing::{debug, error, info};

use crate::clone::build_clone;
use crate::compat::propagate_compatibility;
use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::locale::localize;
use crate::mastery::extend_mastery;
use crate::report::{Diagnostic, MergeReport};
use crate::trader::merge_assort;

/// What [`ContentMerger::clone_and_register`] did with an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloneOutcome {
    /// The clone was stored and registered.
    Registered,
    /// The item is disabled and was left alone.
    Disabled,
}

/// Merges a [`PatchDatabase`] into a [`HostDatabase`].
///
/// The merger holds the only mutable borrow of the host database for the
/// duration of the pass. Operations can be called one at a time, or all at
/// once through [`run`](Self::run).
pub struct ContentMerger<'a> {
    host: &'a mut HostDatabase,
    patch: &'a PatchDatabase,
    config: &'a MergeConfig,
    report: MergeReport,
}

impl<'a> ContentMerger<'a> {
    pub fn new(host: &'a mut HostDatabase, patch: &'a PatchDatabase, config: &'a MergeConfig) -> Self {
        Self {
            host,
            patch,
            config,
            report: MergeReport::new(),
        }
    }

    /// The report accumulated so far.
    pub fn report(&self) -> &MergeReport {
        &self.report
    }

    /// Run the whole pass and return its report.
    ///
    /// Items are processed in id order: clone and register, propagate, then
    /// localize. Configured traders are merged next, then mastery records
    /// are extended.
    ///
    /// Id order is not file order. Handbook and filter entries are appended
    /// in sorted id order, and a clone only inherits the propagated ids of
    /// items whose ids sort before its own.
    pub fn run(mut self) -> MergeReport {
        let patch = self.patch;
        let config = self.config;

        for (id, item) in &patch.items {
            self.merge_item(id, item);
        }

        for (alias, trader_id) in &config.traders {
            match self.merge_trader_assort(trader_id) {
                Ok(n) => debug!(trader = %alias, offers = n, "merged trader assort"),
                Err(MergeError::MissingHostTrader(trader)) => {
                    self.report.record(Diagnostic::MissingHostTrader { trader })
                }
                Err(MergeError::MissingPatchTrader(trader)) => {
                    self.report.record(Diagnostic::MissingPatchTrader { trader })
                }
                Err(e) => error!(trader = %alias, error = %e, "trader merge failed"),
            }
        }

        self.extend_mastery_templates();

        info!(
            mod_name = %config.mod_name,
            cloned = self.report.cloned.len(),
            disabled = self.report.disabled.len(),
            failed = self.report.failed.len(),
            propagated = self.report.propagated,
            trader_items = self.report.trader_items,
            mastery_templates = self.report.mastery_templates,
            warnings = self.report.warnings(),
            errors = self.report.errors(),
            "content merge complete"
        );
        self.report
    }

    fn merge_item(&mut self, id: &str, item: &PatchItem) {
        if !item.enable {
            self.report.disabled.push(id.to_string());
            if !self.config.ungated_side_effects {
                debug!(item = id, "item disabled, skipped");
                return;
            }
        }

        if item.enable {
            match self.clone_and_register(id) {
                Ok(_) => {}
                Err(MergeError::MissingCloneSource { item: failed, source_id }) => {
                    self.report.failed.push(failed.clone());
                    self.report.record(Diagnostic::MissingCloneSource {
                        item: failed,
                        source_id,
                    });
                    return;
                }
                Err(e) => {
                    self.report.failed.push(id.to_string());
                    error!(item = id, error = %e, "clone failed");
                    return;
                }
            }
        }

        self.propagate_compatibility(&item.source, id);

        match &item.locales {
            Some(strings) => {
                self.localize(id, strings);
            }
            None => self.report.record(Diagnostic::MissingLocales { item: id.to_string() }),
        }
    }

    /// Clone the item's source template, apply its overrides, compatibilities
    /// and conflicts, store it under `patch_id`, and add a handbook entry.
    ///
    /// Disabled items are left alone. A missing clone source is an error for
    /// this item only; the host database is not touched.
    pub fn clone_and_register(&mut self, patch_id: &str) -> MergeResult<CloneOutcome> {
        let patch = self.patch;
        let item = patch
            .items
            .get(patch_id)
            .ok_or_else(|| MergeError::UnknownPatchItem(patch_id.to_string()))?;

        if !item.enable {
            return Ok(CloneOutcome::Disabled);
        }

        let source = self
            .host
            .item(&item.source)
            .ok_or_else(|| MergeError::MissingCloneSource {
                item: patch_id.to_string(),
                source_id: item.source.clone(),
            })?;

        let (clone, diagnostics) = build_clone(source, patch_id, item);
        for diagnostic in diagnostics {
            self.report.record(diagnostic);
        }

        if self
            .host
            .templates
            .items
            .insert(patch_id.to_string(), clone)
            .is_some()
        {
            self.report.record(Diagnostic::IdCollision { item: patch_id.to_string() });
        }

        match &item.handbook {
            Some(meta) => self.host.templates.handbook.items.push(HandbookEntry {
                id: patch_id.to_string(),
                parent_id: meta.parent_id.clone(),
                price: meta.price,
            }),
            None => self
                .report
                .record(Diagnostic::MissingHandbook { item: patch_id.to_string() }),
        }

        debug!(item = patch_id, source = %item.source, "cloned and registered");
        self.report.cloned.push(patch_id.to_string());
        Ok(CloneOutcome::Registered)
    }

    /// Add `new_id` beside `source_id` in every non-patch template's slot
    /// filters and conflict lists. Returns the number of lists extended.
    pub fn propagate_compatibility(&mut self, source_id: &str, new_id: &str) -> usize {
        let n = propagate_compatibility(&mut self.host.templates.items, self.patch, source_id, new_id);
        self.report.propagated += n;
        n
    }

    /// Write the item's display strings into every host language. Returns the
    /// number of languages written.
    pub fn localize(&mut self, new_id: &str, strings: &LocaleStrings) -> usize {
        let n = localize(&mut self.host.locales.global, new_id, strings);
        self.report.localized += n;
        n
    }

    /// Merge the patch assort for `trader_id` into the host trader. Returns
    /// the number of offers appended.
    pub fn merge_trader_assort(&mut self, trader_id: &str) -> MergeResult<usize> {
        let patch = self
            .patch
            .traders
            .get(trader_id)
            .ok_or_else(|| MergeError::MissingPatchTrader(trader_id.to_string()))?;
        let host = self
            .host
            .traders
            .get_mut(trader_id)
            .ok_or_else(|| MergeError::MissingHostTrader(trader_id.to_string()))?;

        let n = merge_assort(&mut host.assort, &patch.assort);
        self.report.trader_items += n;
        Ok(n)
    }

    /// Append the configured template ids to matching mastery records.
    /// Returns the number of ids appended.
    pub fn extend_mastery_templates(&mut self) -> usize {
        let n = extend_mastery(&mut self.host.globals.config.mastering, &self.config.mastery);
        self.report.mastery_templates += n;
        n
    }
}
