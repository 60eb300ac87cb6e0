//! Typed database loading and saving.

use std::path::Path;

use loadout_types::{HostDatabase, PatchDatabase};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::error::{LoadError, LoadResult};
use crate::import::load_tree;

/// Load a host database from a directory tree or a single JSON file.
pub fn load_host(path: &Path) -> LoadResult<HostDatabase> {
    let db: HostDatabase = decode(load_tree(path)?, "host database")?;
    info!(
        path = %path.display(),
        items = db.templates.items.len(),
        languages = db.locales.global.len(),
        traders = db.traders.len(),
        "loaded host database"
    );
    Ok(db)
}

/// Load a patch set from a mod's database directory.
pub fn load_patch(path: &Path) -> LoadResult<PatchDatabase> {
    let db: PatchDatabase = decode(load_tree(path)?, "patch database")?;
    info!(
        path = %path.display(),
        items = db.items.len(),
        enabled = db.enabled_items().count(),
        traders = db.traders.len(),
        "loaded patch database"
    );
    Ok(db)
}

/// Write a host database as a single pretty-printed JSON file.
pub fn save_host(db: &HostDatabase, path: &Path) -> LoadResult<()> {
    let text = serde_json::to_string_pretty(db)
        .map_err(|e| LoadError::Serialization(e.to_string()))?;
    std::fs::write(path, text).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn decode<T: DeserializeOwned>(value: Value, what: &'static str) -> LoadResult<T> {
    serde_json::from_value(value).map_err(|source| LoadError::Schema { what, source })
}
