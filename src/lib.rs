//! lrukit: a fixed-capacity key-value cache with least-recently-used eviction.
//!
//! The cache pairs an `FxHashMap` index with a recency list whose nodes live
//! in a slot arena and link to each other by integer handles. See
//! [`policy::lru`] for the algorithm and its invariants.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCache::new(2);
//! cache.store("a", 1);
//! cache.store("b", 2);
//! cache.get(&"a")?;
//! cache.store("c", 3);
//! assert!(!cache.contains(&"b"));
//! # Ok::<(), NotFoundError>(())
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::{InvariantError, NotFoundError};
pub use crate::policy::lru::LruCache;
