//! High-level Loadout API.
//!
//! A [`ContentMod`] ties a mod directory to a merge configuration. The host
//! calls it through the [`PostDbLoad`] hook once its own database is loaded.

pub mod error;
pub mod hook;
pub mod content_mod;

pub use content_mod::{merge, ContentMod, CONFIG_FILE};
pub use error::{SdkError, SdkResult};
pub use hook::{NoOpHook, PostDbLoad};

// Re-export key types
pub use loadout_merge::{Diagnostic, MergeConfig, MergeReport, Severity};
pub use loadout_types::{HostDatabase, PatchDatabase};
