use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("mod directory not found: {0}")]
    ModNotFound(String),

    #[error("load error: {0}")]
    Load(#[from] loadout_loader::LoadError),

    #[error("merge error: {0}")]
    Merge(#[from] loadout_merge::MergeError),
}

pub type SdkResult<T> = Result<T, SdkError>;
