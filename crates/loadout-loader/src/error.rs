//! Error types for the loader crate.

use std::path::PathBuf;

/// Errors that can occur while importing a database tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The path handed to the importer does not exist.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading a file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A file was not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file and a directory (or two files) resolve to the same key.
    #[error("duplicate key {key:?} at {}", .path.display())]
    DuplicateKey { key: String, path: PathBuf },

    /// The merged tree does not match the expected database schema.
    #[error("{what} does not match schema: {source}")]
    Schema {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a database for output failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
