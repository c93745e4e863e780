//! # Least Recently Used (LRU) Cache
//!
//! A fixed-capacity key-value cache that evicts the least recently used
//! entry when a new key arrives at a full cache. Every operation except
//! iteration and [`recency_rank`](LruCache::recency_rank) is O(1).
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V>                          │
//!   │                                                                  │
//!   │   ┌──────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, Entry<V>>  (index)                         │   │
//!   │   │                                                          │   │
//!   │   │  ┌───────┬──────────────────────────────┐                │   │
//!   │   │  │  Key  │  Entry { slot, value }       │                │   │
//!   │   │  ├───────┼──────────────────────────────┤                │   │
//!   │   │  │  "a"  │  { slot: id_2, value: 1 } ───┼───────┐        │   │
//!   │   │  │  "b"  │  { slot: id_3, value: 2 } ───┼───┐   │        │   │
//!   │   │  │  "c"  │  { slot: id_1, value: 3 } ─┐ │   │   │        │   │
//!   │   │  └───────┴────────────────────────────┼─┴───┼───┼────────┘   │
//!   │   └───────────────────────────────────────┼─────┼───┼────────────┘
//!   │                                           ▼     │   ▼            │
//!   │   ┌──────────────────────────────────────────────────────────┐   │
//!   │   │  RecencyList<K>  (order, nodes in a SlotArena)           │   │
//!   │   │                                                 ▼        │   │
//!   │   │  head ──► [id_1 "c"] ◄──► [id_2 "a"] ◄──► [id_3 "b"]     │   │
//!   │   │            MRU                              LRU ◄── tail │   │
//!   │   └──────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index owns the values; the list owns one copy of each key and only
//! records order. Each entry stores the [`SlotId`] of its key's list node, so
//! promotion and removal never search the list.
//!
//! ## Operations Flow
//!
//! ```text
//!   store(D) on a full cache (capacity = 3)
//!   ═══════════════════════════════════════════════════════════════
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!     1. pop [C] from the tail, remove C from the index
//!     2. push [D] at the head, index D → Entry { slot, value }
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   get(B)
//!   ═══════════════════════════════════════════════════════════════
//!     1. index lookup: O(1)
//!     2. relink B's node at the head; its SlotId is unchanged
//!     head ──► [B] ◄──► [D] ◄──► [A] ◄── tail
//!
//!   peek(A) / contains(A)
//!   ═══════════════════════════════════════════════════════════════
//!     index lookup only, order unchanged
//! ```
//!
//! ## Methods
//!
//! | Method             | Complexity | Recency effect | Description                     |
//! |--------------------|------------|----------------|---------------------------------|
//! | `new(capacity)`    | O(1)       | -              | Empty cache                     |
//! | `store(k, v)`      | O(1)*      | promotes `k`   | Insert or overwrite, may evict  |
//! | `get(&k)`          | O(1)       | promotes `k`   | `Result<&V, NotFoundError>`     |
//! | `cache[&k]`        | O(1)       | none           | Like `peek`, panics if absent   |
//! | `&mut cache[&k]`   | O(1)       | promotes `k`   | Like `get_mut`, panics if absent|
//! | `get_mut(&k)`      | O(1)       | promotes `k`   | Mutable access                  |
//! | `peek(&k)`         | O(1)       | none           | `Option<&V>`                    |
//! | `contains(&k)`     | O(1)       | none           | Membership test                 |
//! | `touch(&k)`        | O(1)       | promotes `k`   | Promote without reading         |
//! | `remove(&k)`       | O(1)       | -              | Remove by key                   |
//! | `pop_lru()`        | O(1)       | -              | Remove the LRU entry            |
//! | `peek_lru()`       | O(1)       | none           | Inspect the LRU entry           |
//! | `recency_rank(&k)` | O(n)       | none           | 0 = most recently used          |
//! | `iter()`           | O(n)       | none           | MRU to LRU                      |
//! | `clear()`          | O(n)       | -              | Drop every entry                |
//!
//! ## Borrowed values
//!
//! `get` reorders the cache, so it takes `&mut self` and the reference it
//! returns stays valid until the next call that needs the cache mutably.
//! Reading several values without reordering goes through `peek`.
//!
//! Promoting entries while walking them is rejected at compile time:
//!
//! ```compile_fail
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::new(3);
//! cache.store("a", 1);
//! cache.store("b", 2);
//!
//! for (key, _) in cache.iter() {
//!     let _ = cache.get(key);
//! }
//! ```
//!
//! ## Capacity 0
//!
//! A zero-capacity cache accepts `store` calls and drops the value at once.
//! It never holds an entry, not even transiently.
//!
//! ## Thread Safety
//!
//! `LruCache` is `Send` and `Sync` when `K` and `V` are. Every method that
//! changes recency takes `&mut self`, so sharing it across threads that
//! read and write needs an external lock.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::NotFoundError;
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.store("a", 1);
//! cache.store("b", 2);
//!
//! assert_eq!(cache.get(&"a"), Ok(&1));      // "b" is now least recent
//! cache.store("c", 3);                      // evicts "b"
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.get(&"b"), Err(NotFoundError));
//! assert_eq!(cache[&"c"], 3);
//!
//! cache.clear();
//! assert!(cache.is_empty());
//! ```

use std::fmt;
use std::hash::Hash;
use std::mem;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builder::CacheConfig;
use crate::ds::recency_list::{self, RecencyList};
use crate::ds::slot_arena::SlotId;
use crate::error::{InvariantError, NotFoundError};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Index record: where the key sits in the recency list, plus the value.
#[derive(Debug)]
struct Entry<V> {
    slot: SlotId,
    value: V,
}

/// Fixed-capacity cache with least-recently-used eviction.
///
/// Keys are cloned once on insertion: one copy indexes the value, the other
/// sits in the recency list.
///
/// The type is deliberately not `Clone`.
pub struct LruCache<K, V> {
    index: FxHashMap<K, Entry<V>>,
    order: RecencyList<K>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Storage grows on demand. Capacity 0 is accepted and produces a cache
    /// that never retains anything.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        LruCache {
            index: FxHashMap::default(),
            order: RecencyList::new(),
            capacity,
        }
    }

    /// Creates an empty cache from a [`CacheConfig`].
    ///
    /// # Panics
    ///
    /// With `prealloc_memory` set, panics if reserving storage for
    /// `config.capacity` entries overflows `isize::MAX` bytes.
    pub fn with_config(config: CacheConfig) -> Self {
        let reserve = config.reserved_slots();
        LruCache {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            order: RecencyList::with_capacity(reserve),
            capacity: config.capacity,
        }
    }

    /// Inserts or overwrites `key` and makes it the most recently used entry.
    ///
    /// Returns the value previously stored under `key`, if any. When `key` is
    /// new and the cache is full, the least recently used entry is evicted
    /// first and its value dropped.
    pub fn store(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.index.get_mut(&key) {
            self.order.move_to_front(entry.slot);
            return Some(mem::replace(&mut entry.value, value));
        }

        if self.capacity == 0 {
            trace!("zero-capacity cache dropped stored value");
            return None;
        }

        if self.index.len() >= self.capacity && self.evict_lru().is_some() {
            trace!(capacity = self.capacity, "evicted least recently used entry");
        }

        let slot = self.order.push_front(key.clone());
        self.index.insert(key, Entry { slot, value });
        None
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// # Errors
    ///
    /// [`NotFoundError`] if `key` is not cached. Nothing is modified in that
    /// case.
    #[inline]
    pub fn get(&mut self, key: &K) -> Result<&V, NotFoundError> {
        let entry = self.index.get(key).ok_or(NotFoundError)?;
        self.order.move_to_front(entry.slot);
        Ok(&entry.value)
    }

    /// Mutable variant of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, NotFoundError> {
        let entry = self.index.get_mut(key).ok_or(NotFoundError)?;
        self.order.move_to_front(entry.slot);
        Ok(&mut entry.value)
    }

    /// Returns the value for `key` without changing recency.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.store(1, "first");
    /// cache.store(2, "second");
    ///
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    ///
    /// // 1 is still least recent.
    /// cache.store(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is cached. Does not affect recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Marks `key` most recently used. Returns `false` if absent.
    #[inline]
    pub fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(entry) => self.order.move_to_front(entry.slot),
            None => false,
        }
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.index.remove(key)?;
        self.order.remove(entry.slot);
        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    #[inline]
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        self.evict_lru()
    }

    /// Returns the least recently used entry without reordering.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let key = self.order.back()?;
        let entry = self.index.get(key)?;
        Some((key, &entry.value))
    }

    /// Position of `key` in recency order, 0 being most recently used.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        let slot = self.index.get(key)?.slot;
        self.order.iter_entries().position(|(id, _)| id == slot)
    }

    /// Iterates entries from most to least recently used without reordering.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            keys: self.order.iter(),
            index: &self.index,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry. Idempotent.
    pub fn clear(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.order.clear();
        if dropped > 0 {
            debug!(dropped, "cleared lru cache");
        }
    }

    /// Cross-checks the index against the recency list.
    ///
    /// Verifies that both hold the same number of entries, that the bound
    /// `len <= capacity` holds, that the list links are sound, and that each
    /// list node's key maps to an entry pointing back at that very node.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index has {} entries but recency list has {}",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.index.len(),
                self.capacity
            )));
        }

        self.order.check_invariants()?;

        for (slot, key) in self.order.iter_entries() {
            let entry = self.index.get(key).ok_or_else(|| {
                InvariantError::new(format!("list node {slot:?} holds a key missing from index"))
            })?;
            if entry.slot != slot {
                return Err(InvariantError::new(format!(
                    "index entry points at {:?} but its key sits in node {slot:?}",
                    entry.slot
                )));
            }
        }
        Ok(())
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_back()?;
        let entry = self.index.remove(&key)?;
        Some((key, entry.value))
    }
}

/// Iterator over `(&K, &V)` from most to least recently used.
pub struct Iter<'a, K, V> {
    keys: recency_list::Iter<'a, K>,
    index: &'a FxHashMap<K, Entry<V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let entry = self.index.get(key)?;
        Some((key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> where K: Eq + Hash {}

impl<K, V> FusedIterator for Iter<'_, K, V> where K: Eq + Hash {}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Index<&K> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Output = V;

    /// Same as [`LruCache::peek`]; recency is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not cached.
    fn index(&self, key: &K) -> &V {
        match self.peek(key) {
            Some(value) => value,
            None => panic!("{}", NotFoundError),
        }
    }
}

impl<K, V> IndexMut<&K> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Same as [`LruCache::get_mut`], promotion included.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not cached.
    fn index_mut(&mut self, key: &K) -> &mut V {
        match self.get_mut(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn store(&mut self, key: K, value: V) -> Option<V> {
        LruCache::store(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Result<&V, NotFoundError> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.index.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU cache with a capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.store(key, value);
        }
    }
}
