//! Error types for the types crate.

/// Errors raised while classifying or validating Loadout records.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    /// An override tree contained `null`, which is neither a leaf nor a record.
    #[error("null override at {path}")]
    NullOverride { path: String },
}

/// Convenience alias for type-level results.
pub type TypesResult<T> = Result<T, TypesError>;
