use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no mapping exists for short path: {0}")]
    NotFound(String),
    #[error("store lock is poisoned")]
    Poisoned,
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
