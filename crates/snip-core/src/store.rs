use crate::error::Result;
use crate::mapping::UrlMapping;
use crate::short_path::ShortPath;
use async_trait::async_trait;

/// Authoritative keeper of all live URL mappings, indexed for O(1) lookup
/// by both short path and full URL.
///
/// The store is the single shared-mutable-state boundary in the system.
/// Implementations must keep the two indexes as one logical unit: a
/// concurrent reader must never observe one index updated and the other
/// stale, and mutations on the same key must serialize (no lost counter
/// updates).
#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Inserts or replaces the record under both indexes atomically.
    ///
    /// Replacing a record at an existing short path must also unlink the
    /// replaced record's full URL from the second index.
    async fn save(&self, mapping: UrlMapping) -> Result<UrlMapping>;

    /// Retrieves the mapping for a given short path. No side effects.
    async fn find_by_short_path(&self, path: &ShortPath) -> Result<Option<UrlMapping>>;

    /// Retrieves the mapping for a given full URL. No side effects.
    ///
    /// Used to keep shortening idempotent: re-shortening a known URL
    /// returns its existing short path instead of minting a new one.
    async fn find_by_full_url(&self, url: &str) -> Result<Option<UrlMapping>>;

    /// Checks whether a short path is already taken.
    async fn exists(&self, path: &ShortPath) -> Result<bool>;

    /// Removes the record from both indexes atomically.
    /// Returns `true` if a record existed.
    async fn delete(&self, path: &ShortPath) -> Result<bool>;

    /// Number of live mappings.
    async fn count(&self) -> Result<usize>;

    /// Atomically increments the access counter and refreshes
    /// `last_accessed_at` for the record at `path`, returning the updated
    /// mapping. Returns `Err(NotFound)` when no record exists.
    ///
    /// Linearizable with concurrent `save`/`delete` on the same key: after
    /// `k` completed calls the counter has advanced by exactly `k`.
    async fn increment_access(&self, path: &ShortPath) -> Result<UrlMapping>;

    /// Removes every mapping. Intended for tests and operational resets.
    async fn clear(&self) -> Result<()>;
}
