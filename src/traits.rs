//! # Cache Trait Hierarchy
//!
//! Defines the trait seam callers program against, so embedding code does
//! not depend on the concrete cache type.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len / is_empty / capacity / clear      │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          RecencyCache<K, V>             │
//!   │                                         │
//!   │  pop_lru() → Option<(K, V)>             │
//!   │  peek_lru() → Option<(&K, &V)>          │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → Option<usize>       │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! | Trait          | Extends        | Purpose                            |
//! |----------------|----------------|------------------------------------|
//! | `CoreCache`    | -              | Universal cache operations         |
//! | `MutableCache` | `CoreCache`    | Adds arbitrary key removal         |
//! | `RecencyCache` | `MutableCache` | Recency-ordered eviction controls  |
//!
//! [`BoundedCache`](crate::cache::BoundedCache) implements all three.

/// Core cache operations that any capacity-bounded cache supports.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash`)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use boundedcache::cache::BoundedCache;
/// use boundedcache::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = BoundedCache::new(100).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// existed.
    ///
    /// If the cache is full and the key is new, the entry chosen by the
    /// eviction policy is discarded first.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// May update internal access state depending on the eviction policy.
    /// Use [`contains`](Self::contains) to check existence without
    /// affecting eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    fn capacity(&self) -> usize;

    /// Removes all entries from the cache.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use boundedcache::cache::BoundedCache;
/// use boundedcache::traits::{CoreCache, MutableCache};
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = BoundedCache::new(100).unwrap();
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
///
/// invalidate_keys(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Caches whose eviction order is a strict recency order.
///
/// Adds direct control over the least-recently-used end of the cache:
/// explicit eviction, observation of the eviction candidate, and recency
/// refresh without retrieval.
///
/// # Example
///
/// ```
/// use boundedcache::cache::BoundedCache;
/// use boundedcache::traits::{CoreCache, RecencyCache};
///
/// let mut cache = BoundedCache::new(3).unwrap();
/// cache.insert(1, "one");
/// cache.insert(2, "two");
/// cache.insert(3, "three");
///
/// // Keep key 1 warm without reading it
/// assert!(cache.touch(&1));
///
/// // Key 2 is now the eviction candidate
/// assert_eq!(cache.peek_lru(), Some((&2, &"two")));
/// assert_eq!(cache.pop_lru(), Some((2, "two")));
/// ```
pub trait RecencyCache<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the least recently used entry without removing it or
    /// refreshing its recency.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks an entry as most recently used without retrieving its value.
    ///
    /// Returns `true` if the key was found.
    fn touch(&mut self, key: &K) -> bool;

    /// Returns the entry's position in recency order (0 = most recent).
    ///
    /// O(n) scan; intended for diagnostics and tests, not hot paths.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
