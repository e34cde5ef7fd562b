//! Cache Store Module
//!
//! The table behind a [`super::TimedCache`]: a HashMap of entries with
//! sliding-TTL expiry. Not synchronised on its own; the owner wraps it in a
//! single lock.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

/// Outcome of a read against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Fresh entry found; its idle timer was reset
    Hit(Vec<u8>),
    /// No entry for the key
    Miss,
    /// Stale entry found and removed
    Expired,
}

impl Lookup {
    /// Converts the lookup into the value, if any.
    pub fn into_value(self) -> Option<Vec<u8>> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Miss | Lookup::Expired => None,
        }
    }
}

// == Cache Store ==
/// Key-value table with a fixed sliding TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Read and expiry counters
    stats: CacheStats,
    /// Idle time after which an entry is stale
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries go stale after `ttl` of inactivity.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or overwrites `key`, touched now.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Reads `key`, refreshing it on a hit and dropping it if stale.
    pub fn get(&mut self, key: &str) -> Lookup {
        let ttl = self.ttl;
        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            return Lookup::Miss;
        };

        if entry.is_expired(ttl) {
            self.entries.remove(key);
            self.stats.record_expired();
            self.stats.set_total_entries(self.entries.len());
            return Lookup::Expired;
        }

        entry.touch();
        self.stats.record_hit();
        Lookup::Hit(entry.value.clone())
    }

    // == Cleanup Expired ==
    /// Removes every entry idle for longer than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(Instant::now())
    }

    /// Same as [`Self::cleanup_expired`], evaluated at `now`.
    pub fn cleanup_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now, ttl));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
