//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding expiration.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload and its last access time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, never interpreted by the cache
    pub value: Vec<u8>,
    /// Creation time, refreshed on every successful read
    pub last_touched: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry touched "now".
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            last_touched: Instant::now(),
        }
    }

    // == Touch ==
    /// Marks the entry as used now.
    ///
    /// `last_touched` never moves backwards.
    pub fn touch(&mut self) {
        let now = Instant::now();
        if now > self.last_touched {
            self.last_touched = now;
        }
    }

    // == Idle Time ==
    /// Time elapsed since the last touch, as of `now`.
    pub fn idle_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_touched)
    }

    // == Is Expired ==
    /// Checks if the entry has been idle for longer than `ttl` as of `now`.
    ///
    /// Boundary condition: an entry idle for exactly `ttl` is still fresh;
    /// it expires once the idle time is strictly greater.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.idle_at(now) > ttl
    }

    /// Checks if the entry has been idle for longer than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(Instant::now(), ttl)
    }
}
