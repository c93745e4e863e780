//! Error types for lrukit.
//!
//! ## Key Components
//!
//! - [`NotFoundError`]: Returned by [`LruCache::get`](crate::policy::lru::LruCache::get)
//!   when the key is not cached. This is the only operational error.
//! - [`InvariantError`]: Returned by `check_invariants` diagnostics when the
//!   index and the recency list disagree.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::NotFoundError;
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<&str, i32> = LruCache::new(4);
//! assert_eq!(cache.get(&"missing"), Err(NotFoundError));
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// NotFoundError
// ---------------------------------------------------------------------------

/// The requested key is not currently cached.
///
/// Never produced by `contains`, `store` or `clear`. A lookup that fails with
/// this error leaves the cache untouched, recency order included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found in cache")]
pub struct NotFoundError;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
