//! Foundation types for Loadout.
//!
//! Loadout injects new items into a game server's in-memory database by
//! cloning existing templates. This crate holds the data shapes shared by
//! every other Loadout crate.
//!
//! # Key Types
//!
//! - [`HostDatabase`] -- the server-owned tables the merge mutates
//! - [`PatchDatabase`] / [`PatchItem`] -- the read-only content being injected
//! - [`OverrideValue`] / [`OverrideTree`] -- field overrides, classified at load time
//! - [`template`] -- accessors for slots, filters, and conflict lists inside raw templates

pub mod error;
pub mod host;
pub mod overrides;
pub mod patch;
pub mod template;

pub use error::{TypesError, TypesResult};
pub use host::{
    Globals, GlobalsConfig, Handbook, HandbookEntry, HostDatabase, LocaleTables, Locales, MasteryRecord,
    Templates, Trader, TraderAssort,
};
pub use overrides::{OverrideTree, OverrideValue, Scalar};
pub use patch::{HandbookMeta, LocaleStrings, PatchDatabase, PatchItem, PatchTrader};
