//! # Capacity-Bounded LRU Cache
//!
//! This module provides [`BoundedCache`], a fixed-capacity key-value store
//! that evicts the least-recently-used entry when a new insertion would
//! exceed capacity. Both `get` and `insert` are O(1) amortized.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                      BoundedCache<K, V>                      │
//!   │                                                              │
//!   │   ┌────────────────────────────────────────────────────┐    │
//!   │   │  FxHashMap<K, NodeId> (index)                      │    │
//!   │   │                                                    │    │
//!   │   │  ┌─────────┬──────────────────────────────────┐    │    │
//!   │   │  │   Key   │  NodeId                          │    │    │
//!   │   │  ├─────────┼──────────────────────────────────┤    │    │
//!   │   │  │  k_1    │  ────────────────────────────┐   │    │    │
//!   │   │  │  k_2    │  ──────────────────────┐     │   │    │    │
//!   │   │  └─────────┴────────────────────────┼─────┼───┘    │    │
//!   │   └───────────────────────────────────── ─────┼────────┘    │
//!   │                                         │     │             │
//!   │   ┌─────────────────────────────────────┼─────┼───────┐     │
//!   │   │  RecencyList<Entry<K, V>> (order)   ▼     ▼       │     │
//!   │   │                                                   │     │
//!   │   │  head ──► [entry] ◄──► [entry] ◄── tail           │     │
//!   │   │          (MRU)                 (LRU)              │     │
//!   │   └───────────────────────────────────────────────────┘     │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries live in the recency list's slot arena and are addressed by
//! stable integer `NodeId` handles, so the index and the ordering never
//! alias through raw pointers and every reorder is a constant number of
//! handle relinks.
//!
//! ## Operations
//!
//! | Method            | Complexity | Description                            |
//! |-------------------|------------|----------------------------------------|
//! | `new(capacity)`   | O(1)       | Fallible constructor, rejects 0        |
//! | `insert(k, v)`    | O(1)*      | Insert or update, may evict LRU        |
//! | `get(&k)`         | O(1)       | Get value, moves entry to MRU          |
//! | `peek(&k)`        | O(1)       | Get value without recency update       |
//! | `contains(&k)`    | O(1)       | Existence check, no recency update     |
//! | `remove(&k)`      | O(1)       | Remove entry by key                    |
//! | `pop_lru()`       | O(1)       | Remove and return least recently used  |
//! | `peek_lru()`      | O(1)       | Observe the eviction candidate         |
//! | `touch(&k)`       | O(1)       | Move to MRU without returning value    |
//! | `recency_rank()`  | O(n)       | Position in recency order (0 = MRU)    |
//! | `iter()`          | O(n)       | MRU-to-LRU traversal                   |
//! | `len()` / `clear` | O(1)/O(n)  | Size and reset                         |
//!
//! *Amortized; covers the hash-map touch plus a constant number of list
//! relinks, including the eviction on an over-capacity insert.
//!
//! ## Eviction Flow
//!
//! ```text
//!   insert(D) with capacity = 3, cache full:
//!
//!   Before:  head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!                     MRU                LRU
//!
//!     1. pop the tail entry [C], drop its index key
//!     2. push [D] at head, index D
//!
//!   After:   head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//! ```
//!
//! Exactly one victim is chosen per over-capacity insert: the single
//! current LRU entry. Recency is a strict total order, so ties cannot
//! occur. Updating an existing key never counts against capacity.
//!
//! ## Failure Semantics
//!
//! The only fatal condition is constructing with zero capacity, rejected as
//! a [`ConfigError`]. Misses are a normal outcome signaled as `None`;
//! `insert` never fails. Every mutating operation updates index and order
//! together, so there is no partial-failure state.
//!
//! ## Thread Safety
//!
//! `BoundedCache` is **not** internally synchronized and provides no
//! sharding or lock-free paths. It is single-owner: operations are totally
//! ordered by call sequence. Embedding systems that need shared access must
//! guard the whole cache with their own mutual exclusion (a single lock
//! around both `get` and `insert`). Stored values are owned by the cache
//! until evicted, removed, or the cache is dropped.

use std::fmt;
use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;

use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot, MetricsSnapshotProvider};
use crate::order::{NodeId, RecencyList};
use crate::traits::{CoreCache, MutableCache, RecencyCache};

/// One cached association, stored in the recency list.
///
/// The key is held here as well as in the index so that eviction from the
/// list tail can find and drop its index entry in O(1).
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity key-value store with least-recently-used eviction.
///
/// Combines an `FxHashMap` index (key → `NodeId`) with an arena-backed
/// recency list holding the entries, so lookup, recency refresh, and
/// eviction are all O(1).
///
/// # Example
///
/// ```
/// use boundedcache::cache::BoundedCache;
/// use boundedcache::traits::CoreCache;
///
/// let mut cache = BoundedCache::new(2).unwrap();
/// cache.insert(1, "one");
/// cache.insert(2, "two");
///
/// assert_eq!(cache.get(&1), Some(&"one"));
///
/// // Key 2 is now LRU; inserting a third key evicts it.
/// cache.insert(3, "three");
/// assert!(!cache.contains(&2));
/// ```
pub struct BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, NodeId>,
    order: RecencyList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Index and arena storage are preallocated for `capacity`, so a cache
    /// running at capacity does not allocate in steady state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero. No usable cache
    /// semantics exist for a capacity-0 cache, so construction is rejected
    /// rather than clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use boundedcache::cache::BoundedCache;
    ///
    /// let cache: BoundedCache<u32, String> = BoundedCache::new(100).unwrap();
    /// assert!(BoundedCache::<u32, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(BoundedCache {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: RecencyList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        })
    }

    /// Read-only lookup without a recency update.
    ///
    /// Unlike [`get`](CoreCache::get), the entry keeps its place in the
    /// eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use boundedcache::cache::BoundedCache;
    /// use boundedcache::traits::CoreCache;
    ///
    /// let mut cache = BoundedCache::new(2).unwrap();
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    ///
    /// // Key 1 is still LRU and is evicted next.
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.peek_calls.incr();

        let &id = self.index.get(key)?;
        let entry = self.order.get(id)?;
        #[cfg(feature = "metrics")]
        self.metrics.peek_found.incr();
        Some(&entry.value)
    }

    /// Returns an iterator over entries from most- to least-recently used.
    ///
    /// Iteration does not refresh recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Verifies index/order consistency.
    ///
    /// Checks that the index and the recency list agree entry-for-entry and
    /// that the capacity bound holds. Normal operation cannot violate these;
    /// the method exists for tests and debug assertions.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but order holds {} entries",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.order.len(),
                self.capacity
            )));
        }
        for (key, &id) in &self.index {
            match self.order.get(id) {
                Some(entry) if entry.key == *key => {},
                Some(_) => {
                    return Err(InvariantError::new(
                        "index entry points at a node holding a different key",
                    ));
                },
                None => {
                    return Err(InvariantError::new("index entry points at a freed node"));
                },
            }
        }
        let walked = self.order.iter_ids().count();
        if walked != self.order.len() {
            return Err(InvariantError::new(format!(
                "list walk visited {} nodes but len is {}",
                walked,
                self.order.len()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    fn debug_validate(&self) {
        self.order.debug_validate();
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

impl<K, V> CoreCache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts or updates an entry, evicting the LRU entry if a new key
    /// would exceed capacity.
    ///
    /// Updating an existing key replaces its value, refreshes its recency
    /// (even if the value is unchanged), and returns the previous value.
    /// It never triggers eviction.
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                let previous = mem::replace(&mut entry.value, value);
                self.order.move_to_front(id);

                #[cfg(feature = "metrics")]
                self.metrics.record_insert_update();
                #[cfg(debug_assertions)]
                self.debug_validate();

                return Some(previous);
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        // Evict exactly one victim: the current LRU entry.
        if self.index.len() >= self.capacity {
            if let Some(evicted) = self.order.pop_back() {
                self.index.remove(&evicted.key);
                #[cfg(feature = "metrics")]
                self.metrics.record_eviction();
            }
        }

        let id = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        None
    }

    /// Looks up a value and marks the entry most-recently-used.
    ///
    /// A miss has no side effect on contents or ordering.
    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        self.order.get(id).map(|entry| &entry.value)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.order.clear();
        self.index.clear();
    }
}

impl<K, V> MutableCache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = match self.index.remove(key) {
            Some(id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_remove(false);
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_remove(true);

        let entry = self.order.remove(id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        entry.map(|entry| entry.value)
    }
}

impl<K, V> RecencyCache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = match self.order.pop_back() {
            Some(entry) => entry,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_pop_lru(false);
                return None;
            },
        };

        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru(true);
        #[cfg(debug_assertions)]
        self.debug_validate();

        Some((entry.key, entry.value))
    }

    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.peek_lru_calls.incr();

        self.order.back().map(|entry| {
            #[cfg(feature = "metrics")]
            self.metrics.peek_lru_found.incr();
            (&entry.key, &entry.value)
        })
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        let moved = match self.index.get(key) {
            Some(&id) => self.order.move_to_front(id),
            None => false,
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_touch(moved);
        #[cfg(debug_assertions)]
        self.debug_validate();

        moved
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        self.metrics.recency_rank_calls.incr();

        let &target = self.index.get(key)?;
        let mut rank = 0usize;
        for id in self.order.iter_ids() {
            #[cfg(feature = "metrics")]
            self.metrics.recency_rank_scan_steps.incr();

            if id == target {
                #[cfg(feature = "metrics")]
                self.metrics.recency_rank_found.incr();
                return Some(rank);
            }
            rank += 1;
        }
        None
    }
}

#[cfg(feature = "metrics")]
impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Returns a copy of the operation counters plus current size gauges.
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            clear_calls: self.metrics.clear_calls,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<CacheMetricsSnapshot> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> fmt::Debug for BoundedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
