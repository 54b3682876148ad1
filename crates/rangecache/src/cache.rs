//! RangeSumCache: LRU cache of range sums with point-update invalidation

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::key::RangeKey;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Fixed-capacity LRU cache mapping inclusive ranges to their sums.
///
/// The cache never sees the array. Callers compute sums on a miss, `put`
/// them, and call [`RangeSumCache::invalidate`] after every write to the
/// array so no stale sum survives.
pub struct RangeSumCache {
    /// Cached sums in recency order
    entries: LruCache<RangeKey, i64>,

    /// Cache statistics
    stats: CacheStats,
}

impl RangeSumCache {
    /// Create a cache holding at most `capacity` ranges
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of distinct ranges retained
    ///
    /// # Returns
    /// * `Result<RangeSumCache>` - `Error::ZeroCapacity` when `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::new(),
        })
    }

    /// Look up the sum for `key`, promoting it to most recently used on a hit
    pub fn get(&mut self, key: RangeKey) -> Option<i64> {
        match self.entries.get(&key) {
            Some(&sum) => {
                self.stats.record_hit();
                Some(sum)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Store the sum for `key` as most recently used.
    ///
    /// An existing entry is overwritten; otherwise the least recently used
    /// entry is evicted when the cache is full.
    pub fn put(&mut self, key: RangeKey, sum: i64) {
        if self.entries.contains(&key) {
            self.stats.record_update();
        } else {
            self.stats.record_insert();
        }

        if let Some((evicted, _)) = self.entries.put(key, sum) {
            trace!(%evicted, inserted = %key, "evicted least recently used range");
            self.stats.record_eviction();
        }
    }

    /// Drop every cached range that covers `index`.
    ///
    /// Call after writing `array[index]`. Surviving entries keep their values
    /// and relative recency. Returns the number of entries removed.
    pub fn invalidate(&mut self, index: usize) -> usize {
        let removed = self.entries.retain(|key, _| !key.covers(index));

        if removed > 0 {
            debug!(index, removed, remaining = self.entries.len(), "invalidated ranges");
            self.stats.record_invalidations(removed);
        }

        removed
    }

    /// Read the sum for `key` without touching recency or statistics
    pub fn peek(&self, key: RangeKey) -> Option<i64> {
        self.entries.peek(&key).copied()
    }

    /// Check whether `key` is cached without touching recency
    pub fn contains(&self, key: RangeKey) -> bool {
        self.entries.contains(&key)
    }

    /// Cached keys from most to least recently used
    pub fn keys(&self) -> impl Iterator<Item = RangeKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current number of cached ranges
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Drop every entry and reset statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }
}
