//! Content merger for Loadout.
//!
//! Runs one synchronous pass that injects a [`PatchDatabase`] into a
//! [`HostDatabase`]:
//!
//! 1. For each enabled patch item, clone its source template, apply the
//!    override tree, add its own compatibilities and conflicts, store it, and
//!    register a handbook entry.
//! 2. Add the new id next to its source in every other template's slot
//!    filters and conflict lists.
//! 3. Write the item's display strings into every language.
//! 4. Append configured traders' assorts.
//! 5. Extend weapon-mastery template lists from the configured table.
//!
//! Nothing is rolled back. Non-fatal problems are collected as
//! [`Diagnostic`]s in the returned [`MergeReport`].
//!
//! [`PatchDatabase`]: loadout_types::PatchDatabase
//! [`HostDatabase`]: loadout_types::HostDatabase

pub mod clone;
pub mod compat;
pub mod config;
pub mod error;
pub mod locale;
pub mod mastery;
pub mod merger;
pub mod overlay;
pub mod report;
pub mod trader;

pub use config::{MasteryExtension, MergeConfig};
pub use error::{MergeError, MergeResult};
pub use merger::{CloneOutcome, ContentMerger};
pub use overlay::{overlay, OverlayIssue};
pub use report::{Diagnostic, MergeReport, Severity};
