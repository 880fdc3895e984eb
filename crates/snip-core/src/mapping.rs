use crate::short_path::ShortPath;
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// The record binding a short path to a full URL plus access metadata.
///
/// `short_path` is the primary key and the sole input to equality and
/// hashing; two mappings with the same identifier are the same mapping
/// regardless of metadata drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlMapping {
    /// Unique identifier, immutable after creation.
    pub short_path: ShortPath,
    /// The original URL this mapping resolves to.
    pub full_url: String,
    /// When the mapping was created, immutable.
    pub created_at: Timestamp,
    /// Refreshed on every counted access.
    pub last_accessed_at: Timestamp,
    /// Informational retention deadline; enforcement is a caller policy.
    pub expires_at: Timestamp,
    /// Number of successful redirects served through this mapping.
    pub access_count: u64,
}

impl UrlMapping {
    /// Creates a fresh mapping at `now` with a retention window.
    ///
    /// All metadata defaults are applied here, at the single construction
    /// site: `last_accessed_at` starts equal to `created_at`, the access
    /// counter starts at zero, and `expires_at = now + retention`.
    pub fn new(
        short_path: ShortPath,
        full_url: impl Into<String>,
        now: Timestamp,
        retention: SignedDuration,
    ) -> Self {
        Self {
            short_path,
            full_url: full_url.into(),
            created_at: now,
            last_accessed_at: now,
            expires_at: now + retention,
            access_count: 0,
        }
    }

    /// Records one successful access: bumps the counter and refreshes
    /// `last_accessed_at` as a single logical step.
    ///
    /// Callers must hold whatever lock protects this record; the store's
    /// `increment_access` is the only production call site.
    pub fn record_access(&mut self, now: Timestamp) {
        self.access_count += 1;
        self.last_accessed_at = now;
    }
}

impl PartialEq for UrlMapping {
    fn eq(&self, other: &Self) -> bool {
        self.short_path == other.short_path
    }
}

impl Eq for UrlMapping {}

impl std::hash::Hash for UrlMapping {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.short_path.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retention() -> SignedDuration {
        SignedDuration::from_hours(24 * 360)
    }

    #[test]
    fn new_applies_defaults() {
        let now = Timestamp::now();
        let mapping = UrlMapping::new("aB3xK9p".into(), "https://example.com", now, retention());

        assert_eq!(mapping.access_count, 0);
        assert_eq!(mapping.created_at, now);
        assert_eq!(mapping.last_accessed_at, now);
        assert_eq!(mapping.expires_at, now + retention());
    }

    #[test]
    fn record_access_bumps_counter_and_timestamp() {
        let now = Timestamp::now();
        let mut mapping =
            UrlMapping::new("aB3xK9p".into(), "https://example.com", now, retention());

        let later = now + SignedDuration::from_secs(30);
        mapping.record_access(later);

        assert_eq!(mapping.access_count, 1);
        assert_eq!(mapping.last_accessed_at, later);
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn equality_is_identifier_only() {
        let now = Timestamp::now();
        let a = UrlMapping::new("aB3xK9p".into(), "https://example.com", now, retention());
        let mut b = UrlMapping::new("aB3xK9p".into(), "https://other.com", now, retention());
        b.record_access(now);

        assert_eq!(a, b);

        let c = UrlMapping::new("zZ9zZ9z".into(), "https://example.com", now, retention());
        assert_ne!(a, c);
    }
}
