//! Construction-time configuration for [`LruCache`].
//!
//! Capacity is the only semantic setting; `prealloc_memory` controls whether
//! the index and the recency arena reserve room for `capacity` entries up
//! front or grow on demand.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100).prealloc(false).build::<u64, String>();
//! cache.store(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Ok(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::policy::lru::LruCache;

/// Configuration for an [`LruCache`].
///
/// | Field             | Type    | Default | Description                      |
/// |-------------------|---------|---------|----------------------------------|
/// | `capacity`        | `usize` | 1000    | Maximum number of entries        |
/// | `prealloc_memory` | `bool`  | true    | Reserve storage for `capacity`   |
///
/// ```
/// use lrukit::builder::CacheConfig;
///
/// let config = CacheConfig {
///     capacity: 5000,
///     ..Default::default()
/// };
/// assert_eq!(config.capacity, 5000);
/// assert!(config.prealloc_memory);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold. Zero is allowed and
    /// yields a cache that never retains anything.
    pub capacity: usize,

    /// Pre-allocate index and list storage for the full capacity.
    ///
    /// When false, storage grows as entries arrive.
    pub prealloc_memory: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            prealloc_memory: true,
        }
    }
}

impl CacheConfig {
    /// Storage to reserve when building a cache from this config.
    pub(crate) fn reserved_slots(&self) -> usize {
        if self.prealloc_memory {
            self.capacity
        } else {
            0
        }
    }
}

/// Builder for [`LruCache`] instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    config: CacheConfig,
}

impl CacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            config: CacheConfig {
                capacity,
                ..CacheConfig::default()
            },
        }
    }

    /// Sets whether storage is reserved up front.
    pub fn prealloc(mut self, prealloc_memory: bool) -> Self {
        self.config.prealloc_memory = prealloc_memory;
        self
    }

    /// Returns the configuration built so far.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn build<K, V>(self) -> LruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::with_config(self.config)
    }
}

impl From<CacheConfig> for CacheBuilder {
    fn from(config: CacheConfig) -> Self {
        Self { config }
    }
}
