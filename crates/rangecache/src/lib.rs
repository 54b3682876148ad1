//! # rangecache
//!
//! LRU cache for range-sum queries over a mutable integer array.
//!
//! ## Architecture
//! - **HashMap**: AHash for fast lookups (O(1))
//! - **LRU List**: Doubly-linked list for eviction (O(1))
//! - **Invalidation**: Full scan dropping every range that covers an updated index
//!
//! The cache holds no reference to the array. Callers own the data and use
//! the [`ops`] helpers (or the cache directly) to keep the two in step.

#![warn(missing_docs)]

mod cache;
mod error;
mod key;
mod lru;
pub mod ops;
mod stats;

pub use cache::RangeSumCache;
pub use error::{Error, Result};
pub use key::RangeKey;
pub use ops::{cached_range_sum, cached_update, range_sum, update};
pub use stats::CacheStats;
