//! # Cache Trait Hierarchy
//!
//! Operation contracts implemented by [`LruCache`](crate::policy::lru::LruCache).
//! Generic code can depend on the narrowest trait it needs.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────┐
//!   │              CoreCache<K, V>                │
//!   │                                             │
//!   │  store(&mut, K, V) → Option<V>              │
//!   │  get(&mut, &K) → Result<&V, NotFoundError>  │
//!   │  contains(&, &K) → bool                     │
//!   │  len / is_empty / capacity                  │
//!   │  clear(&mut)                                │
//!   └──────────────────────┬──────────────────────┘
//!                          │
//!                          ▼
//!   ┌─────────────────────────────────────────────┐
//!   │            MutableCache<K, V>               │
//!   │                                             │
//!   │  remove(&mut, &K) → Option<V>               │
//!   │  remove_batch(&mut, &[K]) → Vec<Option<V>>  │
//!   └──────────────────────┬──────────────────────┘
//!                          │
//!                          ▼
//!   ┌─────────────────────────────────────────────┐
//!   │           LruCacheTrait<K, V>               │
//!   │                                             │
//!   │  pop_lru(&mut) → Option<(K, V)>             │
//!   │  peek_lru(&) → Option<(&K, &V)>             │
//!   │  touch(&mut, &K) → bool                     │
//!   │  recency_rank(&, &K) → Option<usize>        │
//!   └─────────────────────────────────────────────┘
//! ```
//!
//! ## Recency and receivers
//!
//! `get` and `touch` reorder entries, so they take `&mut self` like every
//! other mutating call. A reference returned by `get` lives until the next
//! such call. Read-only methods (`contains`, `peek_lru`, `recency_rank`)
//! take `&self` and never change the order.

use crate::error::NotFoundError;

/// Operations every cache supports.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::CoreCache;
///
/// fn warm<C: CoreCache<u32, String>>(cache: &mut C) {
///     for id in 0..3 {
///         cache.store(id, format!("page-{id}"));
///     }
/// }
///
/// let mut cache = LruCache::new(2);
/// warm(&mut cache);
/// assert_eq!(cache.len(), 2);
/// assert!(!cache.contains(&0));
/// ```
pub trait CoreCache<K, V> {
    /// Inserts or overwrites `key`, making it the most recently used entry.
    ///
    /// Returns the value previously stored under `key`. When `key` is new and
    /// the cache is full, the least recently used entry is evicted first.
    fn store(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// Fails with [`NotFoundError`] when `key` is absent, in which case
    /// nothing is modified.
    fn get(&mut self, key: &K) -> Result<&V, NotFoundError>;

    /// Returns `true` if `key` is cached. Does not affect recency.
    fn contains(&self, key: &K) -> bool;

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;

    /// Drops every entry.
    fn clear(&mut self);
}

/// Caches that allow removing arbitrary keys.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key` and returns its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in order, returning the values found.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency-specific operations.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::{CoreCache, LruCacheTrait};
///
/// let mut cache = LruCache::new(3);
/// cache.store("a", 1);
/// cache.store("b", 2);
/// cache.store("c", 3);
///
/// cache.touch(&"a");
/// assert_eq!(cache.recency_rank(&"a"), Some(0));
/// assert_eq!(cache.peek_lru(), Some((&"b", &2)));
/// assert_eq!(cache.pop_lru(), Some(("b", 2)));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without reordering.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` most recently used. Returns `false` if absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order; 0 is the most recently used.
    ///
    /// O(n): walks the list from the front.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
