use thiserror::Error;

/// Failures crossing the storage seam.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether re-submitting the same operation can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Backend(_) => true,
            StoreError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
