use crate::error::ShortenError;
use crate::shortener::Shortener;
use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use snip_core::{MappingStore, ShortPath, UrlMapping};
use snip_generator::Generator;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ShortenError>;

/// Retention window applied to new mappings unless overridden.
pub const DEFAULT_RETENTION_DAYS: i64 = 360;

/// Upper bound on the collision-retry loop in [`ShortenerService::shorten`].
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// A concrete implementation of the [`Shortener`] trait.
///
/// Wraps a [`MappingStore`] and a [`Generator`] to handle idempotent
/// shortening, collision retries, and access-counted redirects. The
/// generator is best-effort; this service probes the store for each
/// candidate and retries on collision, bounded by
/// [`MAX_GENERATION_ATTEMPTS`].
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    retention: SignedDuration,
}

impl<S: MappingStore, G: Generator> ShortenerService<S, G> {
    /// Creates a service with the default 360-day retention window.
    pub fn new(store: S, generator: G) -> Self {
        Self::with_retention(
            store,
            generator,
            SignedDuration::from_hours(24 * DEFAULT_RETENTION_DAYS),
        )
    }

    /// Creates a service with an explicit retention window.
    pub fn with_retention(store: S, generator: G, retention: SignedDuration) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            retention,
        }
    }

    /// Generates a candidate that does not collide with any live mapping.
    async fn generate_unique(&self) -> Result<ShortPath> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.generate()?;
            if !self.store.exists(&candidate).await? {
                return Ok(candidate);
            }
            // Collision: the candidate is live. Loop with a fresh one.
        }
        Err(ShortenError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

#[async_trait]
impl<S: MappingStore, G: Generator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, full_url: &str) -> Result<ShortPath> {
        // Idempotency: re-shortening a known URL returns its existing path.
        if let Some(existing) = self.store.find_by_full_url(full_url).await? {
            return Ok(existing.short_path);
        }

        let candidate = self.generate_unique().await?;
        let mapping = UrlMapping::new(candidate, full_url, Timestamp::now(), self.retention);
        let saved = self.store.save(mapping).await?;
        Ok(saved.short_path)
    }

    async fn lookup(&self, path: &ShortPath) -> Result<UrlMapping> {
        self.store
            .find_by_short_path(path)
            .await?
            .ok_or_else(|| ShortenError::NotFound(path.to_string()))
    }

    async fn redirect(&self, path: &ShortPath) -> Result<String> {
        // A single store call both finds and counts, so the increment is
        // linearizable with concurrent redirects and deletes on this key.
        let mapping = self.store.increment_access(path).await?;
        Ok(mapping.full_url)
    }

    async fn delete(&self, path: &ShortPath) -> Result<bool> {
        Ok(self.store.delete(path).await?)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.store.count().await?)
    }

    fn is_valid_format(&self, candidate: &str) -> bool {
        self.generator.is_valid_format(candidate)
    }
}
