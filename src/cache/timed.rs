//! Timed Cache Module
//!
//! Thread-safe handle around a [`CacheStore`] with its own reaper task.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex};
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, Lookup};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper_task;

// == Timed Cache ==
/// In-memory cache of raw byte payloads with a sliding TTL.
///
/// Entries expire once they have not been added or read for longer than the
/// TTL. Stale entries are dropped lazily by [`TimedCache::get`] and swept by
/// a background reaper that runs once per TTL period.
///
/// Cloning is cheap: every clone shares the same table and reaper. The reaper
/// stops on [`TimedCache::close`], or once the last clone is dropped.
#[derive(Debug, Clone)]
pub struct TimedCache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    shutdown: Arc<watch::Sender<bool>>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// # Errors
    /// - [`CacheError::InvalidConfig`] if `ttl` is zero or too large to
    ///   schedule a reaper tick
    /// - [`CacheError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "TTL must be greater than zero".to_string(),
            ));
        }
        if Instant::now().checked_add(ttl).is_none() {
            return Err(CacheError::InvalidConfig(format!(
                "TTL of {:?} is too large",
                ttl
            )));
        }
        Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let (shutdown, shutdown_rx) = watch::channel(false);
        spawn_reaper_task(store.clone(), ttl, shutdown_rx);

        Ok(Self {
            store,
            ttl,
            shutdown: Arc::new(shutdown),
        })
    }

    // == Add ==
    /// Inserts or overwrites `key`. The entry's idle timer starts now.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "Cache add");
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the value for `key` if present and fresh, resetting its idle
    /// timer. A stale entry is removed and reported as absent.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let lookup = self.store.lock().await.get(key);

        match &lookup {
            Lookup::Hit(_) => debug!(key, "Cache hit"),
            Lookup::Miss => debug!(key, "Cache miss"),
            Lookup::Expired => debug!(key, "Cache miss: entry expired"),
        }

        lookup.into_value()
    }

    // == Close ==
    /// Signals the reaper to stop.
    ///
    /// Safe to call more than once; returns `true` only for the call that
    /// actually stopped it. Entries stay readable afterwards and still expire
    /// lazily on read.
    pub fn close(&self) -> bool {
        let stopped = self.shutdown.send_if_modified(|closed| {
            if *closed {
                false
            } else {
                *closed = true;
                true
            }
        });
        if stopped {
            debug!("Timed cache closed");
        }
        stopped
    }

    /// Returns true once [`TimedCache::close`] has been called.
    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}
