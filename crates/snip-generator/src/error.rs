use thiserror::Error;

/// Errors returned by generator construction and identifier generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid identifier length {length}; expected 1..={max_length}")]
    InvalidLength { length: usize, max_length: usize },
    #[error("entropy source failed: {0}")]
    Entropy(String),
}
