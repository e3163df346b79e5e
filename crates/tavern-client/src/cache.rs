//! In-process query cache with per-key request coalescing.
//!
//! Values are stored type-erased and handed back as `Arc<T>`. For any key at
//! most one fetch is in flight: concurrent callers queue on a per-key lock
//! and find the first caller's result when they get it. Different keys never
//! share a lock.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tavern_config::CacheConfig;

use crate::cache_key::CacheKey;

type InflightLock = Arc<tokio::sync::Mutex<()>>;

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    stored_at: Instant,
    /// Insertion order, used to pick eviction victims.
    seq: u64,
}

#[derive(Default)]
struct Entries {
    map: HashMap<CacheKey, Entry>,
    next_seq: u64,
}

pub struct QueryCache {
    stale_after: Duration,
    max_entries: usize,
    entries: Mutex<Entries>,
    inflight: Mutex<HashMap<CacheKey, InflightLock>>,
}

impl QueryCache {
    /// Entries older than `stale_after` are refetched; past `max_entries`
    /// the oldest entry is evicted.
    #[must_use]
    pub fn new(stale_after: Duration, max_entries: usize) -> Self {
        Self {
            stale_after,
            max_entries: max_entries.max(1),
            entries: Mutex::new(Entries::default()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.stale_after(), config.max_entries)
    }

    /// Return the cached value for `key`, or run `fetch` and cache its
    /// success value.
    ///
    /// Errors are returned to the caller that ran the fetch and are not
    /// cached; the next caller fetches again.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `fetch`.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: &CacheKey, fetch: F) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.fresh::<T>(key) {
            tracing::debug!(%key, "cache hit");
            return Ok(hit);
        }

        let lock = self.inflight_lock(key);
        let guard = lock.lock().await;
        let result = match self.fresh::<T>(key) {
            Some(hit) => {
                tracing::debug!(%key, "cache hit after wait");
                Ok(hit)
            }
            None => {
                tracing::debug!(%key, "cache miss");
                match fetch().await {
                    Ok(value) => {
                        let value = Arc::new(value);
                        self.store(key.clone(), Arc::clone(&value) as Arc<dyn Any + Send + Sync>);
                        Ok(value)
                    }
                    Err(err) => Err(err),
                }
            }
        };
        drop(guard);
        self.release_inflight(key, &lock);
        result
    }

    /// Drop one entry. Returns whether it was present.
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        let removed = self.entries().map.remove(key).is_some();
        tracing::debug!(%key, removed, "cache invalidate");
        removed
    }

    /// Drop every entry whose key starts with `prefix`. Returns how many
    /// were removed.
    pub fn invalidate_prefix(&self, prefix: &CacheKey) -> usize {
        let removed = self.invalidate_matching(|key| key.starts_with(prefix));
        tracing::debug!(%prefix, removed, "cache invalidate prefix");
        removed
    }

    /// Drop every entry whose key satisfies `predicate`. Returns how many
    /// were removed.
    pub fn invalidate_matching(&self, predicate: impl Fn(&CacheKey) -> bool) -> usize {
        let mut entries = self.entries();
        let before = entries.map.len();
        entries.map.retain(|key, _| !predicate(key));
        before - entries.map.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries().map.clear();
    }

    fn entries(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh<T: Any + Send + Sync>(&self, key: &CacheKey) -> Option<Arc<T>> {
        let value = {
            let entries = self.entries();
            let entry = entries.map.get(key)?;
            if entry.stored_at.elapsed() >= self.stale_after {
                return None;
            }
            Arc::clone(&entry.value)
        };
        // A key holding a different type is a miss; the fetch overwrites it.
        value.downcast::<T>().ok()
    }

    fn store(&self, key: CacheKey, value: Arc<dyn Any + Send + Sync>) {
        let stale_after = self.stale_after;
        let mut entries = self.entries();
        entries
            .map
            .retain(|_, entry| entry.stored_at.elapsed() < stale_after);

        if entries.map.len() >= self.max_entries
            && !entries.map.contains_key(&key)
            && let Some(victim) = entries
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(key, _)| key.clone())
        {
            tracing::debug!(key = %victim, "cache evict");
            entries.map.remove(&victim);
        }

        let seq = entries.next_seq;
        entries.next_seq += 1;
        entries.map.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
                seq,
            },
        );
    }

    fn inflight_lock(&self, key: &CacheKey) -> InflightLock {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            inflight
                .entry(key.clone())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
        )
    }

    /// Forget the per-key lock once no other caller holds or awaits it.
    fn release_inflight(&self, key: &CacheKey, lock: &InflightLock) {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        let idle = inflight
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, lock) && Arc::strong_count(lock) <= 2);
        if idle {
            inflight.remove(key);
        }
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("stale_after", &self.stale_after)
            .field("max_entries", &self.max_entries)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
