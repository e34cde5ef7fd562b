//! Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired entries out of `store`.
///
/// The first sweep happens one `period` after spawning, then every `period`.
/// Each sweep holds the store lock for the whole scan.
///
/// The task exits when `shutdown` flips to `true` or when every sender for
/// it has been dropped. The returned JoinHandle can also be aborted.
///
/// Must be called from within a Tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
/// let (tx, rx) = watch::channel(false);
/// let handle = spawn_reaper_task(store.clone(), ttl, rx);
/// // Later:
/// tx.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(period = ?period, "Starting cache reaper task");

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {
                    let removed = store.lock().await.cleanup_expired();

                    if removed > 0 {
                        info!("Cache reaper: removed {} expired entries", removed);
                    } else {
                        debug!("Cache reaper: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    // Err means every cache handle is gone
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        debug!("Cache reaper task stopped");
    })
}
