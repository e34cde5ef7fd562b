//! Cache Module
//!
//! Provides an in-memory byte cache with sliding TTL expiration, lazy expiry
//! on read and a background reaper.

mod entry;
mod stats;
mod store;
mod timed;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{CacheStore, Lookup};
pub use timed::TimedCache;
