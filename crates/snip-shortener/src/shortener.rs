use crate::error::ShortenError;
use async_trait::async_trait;
use snip_core::{ShortPath, UrlMapping};

type Result<T> = std::result::Result<T, ShortenError>;

/// The transport-independent surface consumed by HTTP, CLI, or RPC
/// front ends.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Issues a short path for `full_url`.
    ///
    /// Idempotent: repeated calls with the same URL return the same path
    /// and never create a second mapping.
    async fn shorten(&self, full_url: &str) -> Result<ShortPath>;

    /// Returns the mapping's metadata without touching access statistics.
    async fn lookup(&self, path: &ShortPath) -> Result<UrlMapping>;

    /// Resolves a short path to its full URL, counting the access.
    ///
    /// Each successful call increments the mapping's counter exactly once.
    async fn redirect(&self, path: &ShortPath) -> Result<String>;

    /// Deletes the mapping. Returns `true` if a mapping existed.
    async fn delete(&self, path: &ShortPath) -> Result<bool>;

    /// Number of live mappings.
    async fn count(&self) -> Result<usize>;

    /// Syntactic pre-check for incoming candidates, so malformed paths
    /// can be rejected without a store lookup.
    fn is_valid_format(&self, candidate: &str) -> bool;
}
