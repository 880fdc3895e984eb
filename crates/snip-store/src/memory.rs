use async_trait::async_trait;
use jiff::Timestamp;
use snip_core::error::{Result, StoreError};
use snip_core::mapping::UrlMapping;
use snip_core::short_path::ShortPath;
use snip_core::store::MappingStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// Both indexes live behind one lock so they can only move together.
///
/// `by_short_path` owns the records; `by_full_url` maps a full URL back to
/// its short path for the idempotency probe. Every mutating operation takes
/// the write lock exactly once, which makes save/delete/increment atomic
/// from any reader's point of view.
#[derive(Debug, Default)]
struct Indexes {
    by_short_path: HashMap<String, UrlMapping>,
    by_full_url: HashMap<String, String>,
}

/// In-memory implementation of the [`MappingStore`] contract.
///
/// A single store-wide `RwLock` keeps the two indexes as one logical unit.
/// Reads on unrelated keys proceed concurrently; mutations serialize, which
/// also gives `increment_access` its no-lost-updates guarantee.
#[derive(Debug, Default)]
pub struct InMemoryMappingStore {
    indexes: RwLock<Indexes>,
}

impl InMemoryMappingStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for InMemoryMappingStore {
    async fn save(&self, mapping: UrlMapping) -> Result<UrlMapping> {
        let mut indexes = self.indexes.write().map_err(|_| StoreError::Poisoned)?;

        let key = mapping.short_path.as_str().to_owned();
        // Replacing a record must unlink its previous full URL, otherwise
        // the second index would keep pointing a stale URL at this path.
        let stale_url = indexes
            .by_short_path
            .get(&key)
            .map(|previous| previous.full_url.clone());
        if let Some(stale_url) = stale_url {
            indexes.by_full_url.remove(&stale_url);
        }

        indexes.by_full_url.insert(mapping.full_url.clone(), key.clone());
        indexes.by_short_path.insert(key, mapping.clone());

        Ok(mapping)
    }

    async fn find_by_short_path(&self, path: &ShortPath) -> Result<Option<UrlMapping>> {
        let indexes = self.indexes.read().map_err(|_| StoreError::Poisoned)?;
        Ok(indexes.by_short_path.get(path.as_str()).cloned())
    }

    async fn find_by_full_url(&self, url: &str) -> Result<Option<UrlMapping>> {
        let indexes = self.indexes.read().map_err(|_| StoreError::Poisoned)?;
        let Some(path) = indexes.by_full_url.get(url) else {
            return Ok(None);
        };
        Ok(indexes.by_short_path.get(path).cloned())
    }

    async fn exists(&self, path: &ShortPath) -> Result<bool> {
        let indexes = self.indexes.read().map_err(|_| StoreError::Poisoned)?;
        Ok(indexes.by_short_path.contains_key(path.as_str()))
    }

    async fn delete(&self, path: &ShortPath) -> Result<bool> {
        let mut indexes = self.indexes.write().map_err(|_| StoreError::Poisoned)?;

        let Some(removed) = indexes.by_short_path.remove(path.as_str()) else {
            return Ok(false);
        };
        indexes.by_full_url.remove(&removed.full_url);
        Ok(true)
    }

    async fn count(&self) -> Result<usize> {
        let indexes = self.indexes.read().map_err(|_| StoreError::Poisoned)?;
        Ok(indexes.by_short_path.len())
    }

    async fn increment_access(&self, path: &ShortPath) -> Result<UrlMapping> {
        let mut indexes = self.indexes.write().map_err(|_| StoreError::Poisoned)?;

        let mapping = indexes
            .by_short_path
            .get_mut(path.as_str())
            .ok_or_else(|| StoreError::NotFound(path.to_string()))?;

        mapping.record_access(Timestamp::now());
        Ok(mapping.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut indexes = self.indexes.write().map_err(|_| StoreError::Poisoned)?;
        indexes.by_short_path.clear();
        indexes.by_full_url.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn path(s: &str) -> ShortPath {
        ShortPath::new(s)
    }

    fn mapping(short: &str, url: &str) -> UrlMapping {
        UrlMapping::new(
            path(short),
            url,
            Timestamp::now(),
            SignedDuration::from_hours(24 * 360),
        )
    }

    #[tokio::test]
    async fn save_and_find_by_short_path() {
        let store = InMemoryMappingStore::new();

        store
            .save(mapping("abc1234", "https://example.com"))
            .await
            .unwrap();

        let found = store
            .find_by_short_path(&path("abc1234"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.full_url, "https://example.com");
        assert_eq!(found.access_count, 0);
    }

    #[tokio::test]
    async fn save_indexes_both_directions() {
        let store = InMemoryMappingStore::new();

        store
            .save(mapping("abc1234", "https://example.com"))
            .await
            .unwrap();

        let by_url = store
            .find_by_full_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_url.short_path, path("abc1234"));
    }

    #[tokio::test]
    async fn find_nonexistent() {
        let store = InMemoryMappingStore::new();

        assert!(store
            .find_by_short_path(&path("nothere"))
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_by_full_url("https://nothere.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn save_replaces_and_unlinks_old_url() {
        let store = InMemoryMappingStore::new();

        store
            .save(mapping("abc1234", "https://old.com"))
            .await
            .unwrap();
        store
            .save(mapping("abc1234", "https://new.com"))
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store
            .find_by_full_url("https://old.com")
            .await
            .unwrap()
            .is_none());
        let found = store
            .find_by_full_url("https://new.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.short_path, path("abc1234"));
    }

    #[tokio::test]
    async fn exists_checks() {
        let store = InMemoryMappingStore::new();

        assert!(!store.exists(&path("abc1234")).await.unwrap());
        store
            .save(mapping("abc1234", "https://example.com"))
            .await
            .unwrap();
        assert!(store.exists(&path("abc1234")).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_both_indexes() {
        let store = InMemoryMappingStore::new();

        store
            .save(mapping("abc1234", "https://example.com"))
            .await
            .unwrap();

        assert!(store.delete(&path("abc1234")).await.unwrap());
        assert!(!store.exists(&path("abc1234")).await.unwrap());
        assert!(store
            .find_by_full_url("https://example.com")
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_nonexistent() {
        let store = InMemoryMappingStore::new();
        assert!(!store.delete(&path("nothere")).await.unwrap());
    }

    #[tokio::test]
    async fn count_tracks_live_mappings() {
        let store = InMemoryMappingStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        store.save(mapping("aaaaaaa", "https://a.com")).await.unwrap();
        store.save(mapping("bbbbbbb", "https://b.com")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn increment_access_updates_counter_and_timestamp() {
        let store = InMemoryMappingStore::new();

        let saved = store
            .save(mapping("abc1234", "https://example.com"))
            .await
            .unwrap();

        let updated = store.increment_access(&path("abc1234")).await.unwrap();
        assert_eq!(updated.access_count, 1);
        assert!(updated.last_accessed_at >= saved.created_at);

        let updated = store.increment_access(&path("abc1234")).await.unwrap();
        assert_eq!(updated.access_count, 2);
    }

    #[tokio::test]
    async fn increment_access_missing_is_not_found() {
        let store = InMemoryMappingStore::new();

        let err = store.increment_access(&path("nothere")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reads_do_not_touch_access_count() {
        let store = InMemoryMappingStore::new();

        store
            .save(mapping("abc1234", "https://example.com"))
            .await
            .unwrap();
        store.increment_access(&path("abc1234")).await.unwrap();

        let by_path = store
            .find_by_short_path(&path("abc1234"))
            .await
            .unwrap()
            .unwrap();
        let by_url = store
            .find_by_full_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_path.access_count, 1);
        assert_eq!(by_url.access_count, 1);
    }

    #[tokio::test]
    async fn clear_empties_both_indexes() {
        let store = InMemoryMappingStore::new();

        store.save(mapping("aaaaaaa", "https://a.com")).await.unwrap();
        store.save(mapping("bbbbbbb", "https://b.com")).await.unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store
            .find_by_full_url("https://a.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn concurrent_increments_lose_no_updates() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryMappingStore::new());
        store
            .save(mapping("abc1234", "https://example.com"))
            .await
            .unwrap();

        let mut handles = vec![];
        for _ in 0..1000 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.increment_access(&path("abc1234")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let final_state = store
            .find_by_short_path(&path("abc1234"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(final_state.access_count, 1000);
    }

    #[tokio::test]
    async fn concurrent_saves_on_distinct_keys() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryMappingStore::new());
        let mut handles = vec![];

        for i in 0..50u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let m = mapping(&format!("path{:03}", i), &format!("https://example{}.com", i));
                store.save(m).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 50);
        for i in 0..50u64 {
            let found = store
                .find_by_full_url(&format!("https://example{}.com", i))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.short_path, path(&format!("path{:03}", i)));
        }
    }
}
