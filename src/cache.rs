//! # Feed Cache
//! Single in-memory slot holding the last built [`Feed`] with an absolute
//! expiry (no sliding refresh). Lost on restart.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::ingest::types::Feed;

/// Name of the only slot, used in logs and metrics.
pub const FEED_SLOT: &str = "feed";

/// Storage seam for the aggregator. Swap in [`NoopFeedCache`] to disable
/// caching, or a shared implementation for multi-instance deployments.
pub trait FeedCache: Send + Sync {
    /// Current feed, or `None` when empty or expired.
    fn get(&self) -> Option<Arc<Feed>>;
    /// Replace the slot and restart the expiry window.
    fn set(&self, feed: Arc<Feed>);
}

#[derive(Debug)]
struct Slot {
    feed: Arc<Feed>,
    expires_at: Instant,
}

/// Time-bounded single-slot cache.
#[derive(Debug)]
pub struct TtlFeedCache {
    slot: Mutex<Option<Slot>>,
    ttl: Duration,
}

impl TtlFeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
        }
    }

    /// One-hour window.
    pub fn hourly() -> Self {
        Self::new(Duration::from_secs(3600))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, Option<Slot>> {
        match self.slot.lock() {
            Ok(g) => g,
            Err(poison) => poison.into_inner(),
        }
    }
}

impl FeedCache for TtlFeedCache {
    fn get(&self) -> Option<Arc<Feed>> {
        let slot = self.lock();
        slot.as_ref()
            .filter(|s| Instant::now() < s.expires_at)
            .map(|s| Arc::clone(&s.feed))
    }

    fn set(&self, feed: Arc<Feed>) {
        let mut slot = self.lock();
        *slot = Some(Slot {
            feed,
            expires_at: Instant::now() + self.ttl,
        });
    }
}

/// Never stores anything; every `get` misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFeedCache;

impl FeedCache for NoopFeedCache {
    fn get(&self) -> Option<Arc<Feed>> {
        None
    }

    fn set(&self, _feed: Arc<Feed>) {}
}
