//! Query cache using moka
//!
//! Stores fetched entity data by [`QueryKey`]. Every key has a generation
//! that invalidation raises; an entry written under an older generation is
//! treated as absent, so a response that was in flight during an
//! invalidation can never resurrect stale data.
//!
//! Generations are drawn from one increasing clock. A key's generation is
//! the later of the global epoch (raised by `invalidate_all`) and its own
//! last invalidation, so only keys invalidated since the last epoch need a
//! slot. Once more keys than the cache capacity hold a slot, the slots are
//! folded into a new epoch, which also invalidates every entry.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use moka::future::Cache;
use serde::{Deserialize, Serialize};

use crate::key::QueryKey;

/// Cache sizing and freshness settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached queries
    pub capacity: u64,
    /// How long fetched data counts as fresh
    #[serde(with = "secs")]
    pub stale_time: Duration,
    /// How long an unread entry is kept before eviction
    #[serde(with = "secs")]
    pub gc_time: Duration,
}

impl CacheConfig {
    /// Longest idle time the cache accepts (100 years)
    pub const MAX_GC_TIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

    /// Same settings with `gc_time` capped at [`Self::MAX_GC_TIME`]
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            gc_time: self.gc_time.min(Self::MAX_GC_TIME),
            ..self
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1_000,
            stale_time: Duration::from_secs(30),
            gc_time: Duration::from_secs(300),
        }
    }
}

mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
    /// Keys holding their own generation slot
    pub tracked_keys: u64,
}

#[derive(Debug, Clone)]
struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    generation: u64,
    fetched_at: Instant,
}

/// Process-wide store of fetched entity data
///
/// Cloning shares the underlying cache.
#[derive(Debug, Clone)]
pub struct QueryCache {
    inner: Cache<QueryKey, Entry>,
    generations: Arc<Generations>,
    stale_time: Duration,
}

#[derive(Debug)]
struct Generations {
    clock: AtomicU64,
    epoch: AtomicU64,
    keys: DashMap<QueryKey, u64>,
    max_keys: usize,
}

impl Generations {
    fn new(max_keys: usize) -> Self {
        Self {
            clock: AtomicU64::new(0),
            epoch: AtomicU64::new(0),
            keys: DashMap::new(),
            max_keys,
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn current(&self, key: &QueryKey) -> u64 {
        let epoch = self.epoch.load(Ordering::SeqCst);
        self.keys.get(key).map_or(epoch, |g| (*g).max(epoch))
    }

    /// Returns `true` when the slots were folded into a new epoch
    fn bump(&self, key: &QueryKey) -> bool {
        let next = self.tick();
        self.keys.insert(key.clone(), next);
        if self.keys.len() > self.max_keys {
            self.bump_all();
            return true;
        }
        false
    }

    fn bump_all(&self) {
        let epoch = self.tick();
        self.epoch.fetch_max(epoch, Ordering::SeqCst);
        let epoch = self.epoch.load(Ordering::SeqCst);
        self.keys.retain(|_, generation| *generation > epoch);
    }
}

impl QueryCache {
    /// Create cache with max capacity and default freshness
    #[inline]
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self::with_config(CacheConfig {
            capacity,
            ..CacheConfig::default()
        })
    }

    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        let config = config.clamped();
        let max_keys = usize::try_from(config.capacity.max(1)).unwrap_or(usize::MAX);
        Self {
            inner: Cache::builder()
                .max_capacity(config.capacity)
                .time_to_idle(config.gc_time)
                .build(),
            generations: Arc::new(Generations::new(max_keys)),
            stale_time: config.stale_time,
        }
    }

    /// Current generation of a key
    ///
    /// Reading never registers the key.
    #[must_use]
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.generations.current(key)
    }

    /// Cached value regardless of freshness
    pub async fn get<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entry(key)
            .await
            .and_then(|e| e.value.downcast_ref::<T>().cloned())
    }

    /// Cached value only while it is younger than the stale time
    pub async fn fresh<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let entry = self.entry(key).await?;
        if entry.fetched_at.elapsed() >= self.stale_time {
            tracing::debug!(%key, "cache entry stale");
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Store a value fetched under the current generation
    pub async fn insert<T>(&self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        let generation = self.generation(&key);
        self.insert_at(key, value, generation).await;
    }

    /// Store a value fetched when the key was at `generation`
    ///
    /// Returns `false` (and stores nothing) when the key was invalidated
    /// after the fetch started.
    pub async fn insert_at<T>(&self, key: QueryKey, value: T, generation: u64) -> bool
    where
        T: Send + Sync + 'static,
    {
        if generation != self.generation(&key) {
            tracing::warn!(%key, generation, "discarding response from before invalidation");
            return false;
        }
        let entry = Entry {
            value: Arc::new(value),
            generation,
            fetched_at: Instant::now(),
        };
        self.inner.insert(key, entry).await;
        true
    }

    /// Drop an entry and bump its generation
    pub async fn invalidate(&self, key: &QueryKey) {
        if self.generations.bump(key) {
            tracing::debug!(%key, "generation slots folded into a new epoch");
            self.inner.invalidate_all();
        } else {
            self.inner.invalidate(key).await;
        }
        tracing::debug!(%key, "cache entry invalidated");
    }

    /// Invalidate all entries
    pub fn invalidate_all(&self) {
        self.generations.bump_all();
        self.inner.invalidate_all();
    }

    /// Check if cache holds a current entry for key
    #[must_use]
    pub async fn contains(&self, key: &QueryKey) -> bool {
        self.entry(key).await.is_some()
    }

    /// Flush moka's pending maintenance so counts are exact
    pub async fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks().await;
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
            tracked_keys: self.generations.keys.len() as u64,
        }
    }

    async fn entry(&self, key: &QueryKey) -> Option<Entry> {
        let entry = self.inner.get(key).await?;
        (entry.generation == self.generation(key)).then_some(entry)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::with_config(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_entity::EntityKind;

    fn key() -> QueryKey {
        QueryKey::list(EntityKind::Category)
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = QueryCache::new(100);
        cache.insert(key(), vec!["a".to_string()]).await;

        assert_eq!(cache.get::<Vec<String>>(&key()).await, Some(vec!["a".to_string()]));
        assert!(cache.contains(&key()).await);
    }

    #[tokio::test]
    async fn wrong_type_is_a_miss() {
        let cache = QueryCache::new(100);
        cache.insert(key(), 5_u32).await;
        assert_eq!(cache.get::<String>(&key()).await, None);
    }

    #[tokio::test]
    async fn invalidation_bumps_generation() {
        let cache = QueryCache::new(100);
        cache.insert(key(), 1_u32).await;
        assert_eq!(cache.generation(&key()), 0);

        cache.invalidate(&key()).await;
        assert_eq!(cache.generation(&key()), 1);
        assert!(!cache.contains(&key()).await);
    }

    #[tokio::test]
    async fn response_from_before_invalidation_is_discarded() {
        let cache = QueryCache::new(100);
        let started_at = cache.generation(&key());

        cache.invalidate(&key()).await;

        assert!(!cache.insert_at(key(), 1_u32, started_at).await);
        assert_eq!(cache.get::<u32>(&key()).await, None);
    }

    #[tokio::test]
    async fn zero_stale_time_is_never_fresh() {
        let cache = QueryCache::with_config(CacheConfig {
            stale_time: Duration::ZERO,
            ..CacheConfig::default()
        });
        cache.insert(key(), 1_u32).await;

        assert_eq!(cache.fresh::<u32>(&key()).await, None);
        assert_eq!(cache.get::<u32>(&key()).await, Some(1));
    }

    #[tokio::test]
    async fn invalidate_all_hides_every_entry() {
        let cache = QueryCache::new(100);
        let detail = QueryKey::detail(EntityKind::Category, "1");
        cache.insert(key(), 1_u32).await;
        cache.insert(detail.clone(), 2_u32).await;

        cache.invalidate_all();

        assert!(!cache.contains(&key()).await);
        assert!(!cache.contains(&detail).await);
    }

    #[tokio::test]
    async fn reads_do_not_register_keys() {
        let cache = QueryCache::new(100);
        for id in 0..50 {
            let detail = QueryKey::detail(EntityKind::Brand, id.to_string());
            let _ = cache.generation(&detail);
            let _ = cache.get::<u32>(&detail).await;
        }
        assert_eq!(cache.stats().tracked_keys, 0);
    }

    #[tokio::test]
    async fn generation_slots_stay_bounded() {
        let cache = QueryCache::new(4);
        let list = key();
        let started_at = cache.generation(&list);

        for id in 0..20 {
            cache
                .invalidate(&QueryKey::detail(EntityKind::Brand, id.to_string()))
                .await;
            assert!(cache.stats().tracked_keys <= 4);
        }

        // folding moves every key forward, so old fetches are still rejected
        assert!(cache.generation(&list) > started_at);
        assert!(!cache.insert_at(list, 1_u32, started_at).await);
    }

    #[tokio::test]
    async fn invalidate_all_rejects_in_flight_fetches() {
        let cache = QueryCache::new(100);
        let detail = QueryKey::detail(EntityKind::Category, "3");
        let started_at = cache.generation(&detail);

        cache.invalidate_all();

        assert!(!cache.insert_at(detail.clone(), 1_u32, started_at).await);
        cache.insert(detail.clone(), 2_u32).await;
        assert_eq!(cache.get::<u32>(&detail).await, Some(2));
    }

    #[test]
    fn huge_gc_time_is_clamped() {
        let config = CacheConfig {
            gc_time: Duration::from_secs(100_000_000_000),
            ..CacheConfig::default()
        };
        assert_eq!(config.clamped().gc_time, CacheConfig::MAX_GC_TIME);
        let _cache = QueryCache::with_config(config);
    }

    #[tokio::test]
    async fn stats_count_entries() {
        let cache = QueryCache::new(100);
        for id in 0..5 {
            cache
                .insert(QueryKey::detail(EntityKind::Brand, id.to_string()), id)
                .await;
        }
        cache.run_pending_tasks().await;
        assert_eq!(cache.stats().entry_count, 5);
    }
}
