//! Recursive JSON importer for Loadout.
//!
//! A database directory is a tree of `*.json` files. Each file becomes a
//! value nested under its relative path, with directory names and file stems
//! as object keys: `database/items/rifles.json` loads as
//! `{"items": {"rifles": ...}}`. The typed entry points decode that tree into
//! a [`HostDatabase`](loadout_types::HostDatabase) or a
//! [`PatchDatabase`](loadout_types::PatchDatabase).

pub mod database;
pub mod error;
pub mod import;

pub use database::{load_host, load_patch, save_host};
pub use error::{LoadError, LoadResult};
pub use import::{load_json_file, load_recursive, load_tree};
