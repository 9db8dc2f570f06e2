use moka::future::Cache;
use std::time::Duration;

/// In-memory snapshot cache backed by moka.
///
/// Holds JSON snapshots of collaborator data (roster projections) so that
/// repeated lookups within one cycle hit memory instead of the collaborator.
/// Entries are automatically evicted after TTL.
pub struct SnapshotCache {
    inner: Cache<String, String>,
}

impl SnapshotCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: String, value: String) {
        self.inner.insert(key, value).await;
    }

    pub async fn invalidate(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_get() {
        let cache = SnapshotCache::new(100, Duration::from_secs(60));
        cache
            .insert("roster:a:b".to_string(), "[]".to_string())
            .await;

        assert_eq!(cache.get("roster:a:b").await, Some("[]".to_string()));
    }

    #[tokio::test]
    async fn get_missing() {
        let cache = SnapshotCache::new(100, Duration::from_secs(60));
        assert_eq!(cache.get("roster:missing").await, None);
    }

    #[tokio::test]
    async fn invalidate() {
        let cache = SnapshotCache::new(100, Duration::from_secs(60));
        cache
            .insert("roster:a:b".to_string(), "[]".to_string())
            .await;
        cache.invalidate("roster:a:b").await;

        assert_eq!(cache.get("roster:a:b").await, None);
    }

    #[tokio::test]
    async fn ttl_expiration() {
        let cache = SnapshotCache::new(100, Duration::from_millis(50));
        cache
            .insert("roster:a:b".to_string(), "[]".to_string())
            .await;

        assert!(cache.get("roster:a:b").await.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get("roster:a:b").await.is_none());
    }
}
