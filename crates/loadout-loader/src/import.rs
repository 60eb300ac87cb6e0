//! Directory-tree JSON import.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{LoadError, LoadResult};

/// Load a database from either a directory tree or a single JSON file.
pub fn load_tree(path: &Path) -> LoadResult<Value> {
    if path.is_dir() {
        load_recursive(path)
    } else if path.is_file() {
        load_json_file(path)
    } else {
        Err(LoadError::NotFound(path.to_path_buf()))
    }
}

/// Parse one JSON file. A leading UTF-8 byte-order mark is tolerated.
pub fn load_json_file(path: &Path) -> LoadResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Import every `*.json` file under `root` into one nested object.
///
/// Directory names and file stems become object keys. Files are visited in
/// file-name order so the result does not depend on directory listing order.
/// Files without a `.json` extension are ignored.
pub fn load_recursive(root: &Path) -> LoadResult<Value> {
    if !root.is_dir() {
        return Err(LoadError::NotFound(root.to_path_buf()));
    }

    let mut tree = Map::new();
    let mut files = 0usize;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let mut keys: Vec<String> = relative
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        keys.push(stem);

        let value = load_json_file(path)?;
        insert_at(&mut tree, &keys, value, path)?;
        files += 1;
    }

    debug!(root = %root.display(), files, "imported database tree");
    Ok(Value::Object(tree))
}

fn insert_at(tree: &mut Map<String, Value>, keys: &[String], value: Value, path: &Path) -> LoadResult<()> {
    let Some((leaf, dirs)) = keys.split_last() else {
        return Ok(());
    };

    let mut node = tree;
    for dir in dirs {
        let child = node
            .entry(dir.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        node = child.as_object_mut().ok_or_else(|| duplicate(dir, path))?;
    }

    if node.contains_key(leaf) {
        return Err(duplicate(leaf, path));
    }
    node.insert(leaf.clone(), value);
    Ok(())
}

fn duplicate(key: &str, path: &Path) -> LoadError {
    LoadError::DuplicateKey {
        key: key.to_string(),
        path: PathBuf::from(path),
    }
}
