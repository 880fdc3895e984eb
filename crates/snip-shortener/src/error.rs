use snip_core::StoreError;
use snip_generator::GeneratorError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShortenError {
    #[error("no mapping exists for short path: {0}")]
    NotFound(String),
    #[error("identifier generation exhausted after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ShortenError {
    fn from(value: StoreError) -> Self {
        // A missing key is a domain outcome, not a backend failure.
        match value {
            StoreError::NotFound(path) => Self::NotFound(path),
            other => Self::Store(other),
        }
    }
}
