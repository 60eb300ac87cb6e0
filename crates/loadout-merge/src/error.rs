//! Error types for the merge crate.

/// Errors that stop a single merge operation.
///
/// The full pass never fails on these: [`ContentMerger::run`] turns them into
/// diagnostics and moves on to the next item or trader.
///
/// [`ContentMerger::run`]: crate::ContentMerger::run
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The patch set has no item with this id.
    #[error("unknown patch item: {0}")]
    UnknownPatchItem(String),

    /// The template named by `clone` is not in the host database.
    #[error("clone source {source_id} for {item} not found in host templates")]
    MissingCloneSource { item: String, source_id: String },

    /// The host database has no trader with this id.
    #[error("host trader not found: {0}")]
    MissingHostTrader(String),

    /// The patch set has no assort for this trader.
    #[error("patch trader not found: {0}")]
    MissingPatchTrader(String),

    /// The configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
