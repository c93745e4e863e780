pub use crate::builder::{CacheBuilder, CacheConfig};
pub use crate::error::{InvariantError, NotFoundError};
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};
