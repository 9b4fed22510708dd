//! Feed Aggregator: runs every collector concurrently, isolates failures,
//! merges in collector order and dedups by `source_url`.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use futures::future::join_all;
use metrics::{counter, gauge, histogram};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::cache::{FeedCache, FEED_SLOT};
use crate::ingest::dedup_by_url;
use crate::ingest::types::{Feed, ScamRecord, SourceCollector};

/// What the HTTP layer needs: a current feed, or an error it can report.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    async fn feed(&self) -> Result<Arc<Feed>>;
}

pub struct FeedService {
    collectors: Vec<Arc<dyn SourceCollector>>,
    cache: Arc<dyn FeedCache>,
    // Serializes rebuilds so concurrent misses hit upstream once.
    rebuild: Mutex<()>,
}

impl FeedService {
    /// `collectors` order is the merge order (earlier wins on duplicate URLs).
    pub fn new(collectors: Vec<Arc<dyn SourceCollector>>, cache: Arc<dyn FeedCache>) -> Self {
        Self {
            collectors,
            cache,
            rebuild: Mutex::new(()),
        }
    }

    /// Cached feed if still fresh, otherwise a full rebuild that replaces it.
    #[instrument(level = "info", skip(self))]
    pub async fn build_feed(&self) -> Arc<Feed> {
        if let Some(feed) = self.cached() {
            return feed;
        }

        let _guard = self.rebuild.lock().await;
        // Another caller may have rebuilt while we waited.
        if let Some(feed) = self.cached() {
            return feed;
        }

        counter!("feed_cache_misses_total").increment(1);
        debug!(slot = FEED_SLOT, "feed cache miss; rebuilding");

        let feed = Arc::new(self.aggregate().await);
        self.cache.set(Arc::clone(&feed));
        feed
    }

    fn cached(&self) -> Option<Arc<Feed>> {
        let hit = self.cache.get()?;
        counter!("feed_cache_hits_total").increment(1);
        debug!(slot = FEED_SLOT, records = hit.len(), "feed cache hit");
        Some(hit)
    }

    /// One uncached build. Never fails: a collector error only empties that
    /// collector's contribution.
    pub async fn aggregate(&self) -> Feed {
        let t0 = Instant::now();

        let outcomes = join_all(self.collectors.iter().map(|c| async move {
            let res = c.collect().await;
            (c.name(), res)
        }))
        .await;

        let lists = outcomes.into_iter().map(|(name, res)| match res {
            Ok(records) => {
                debug!(source = name, count = records.len(), "collector succeeded");
                records
            }
            Err(e) => {
                warn!(source = name, error = %format!("{e:#}"), "collector failed");
                counter!("collector_errors_total", "source" => name).increment(1);
                Vec::new()
            }
        });

        let feed = Feed::new(merge_records(lists));

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        counter!("feed_builds_total").increment(1);
        gauge!("feed_records").set(feed.len() as f64);
        histogram!("feed_build_ms").record(ms);
        info!(records = feed.len(), elapsed_ms = ms, "feed built");

        feed
    }
}

#[async_trait]
impl FeedProvider for FeedService {
    async fn feed(&self) -> Result<Arc<Feed>> {
        Ok(self.build_feed().await)
    }
}

/// Concatenate in the given order and keep the first record per URL.
pub fn merge_records<I>(lists: I) -> Vec<ScamRecord>
where
    I: IntoIterator<Item = Vec<ScamRecord>>,
{
    dedup_by_url(lists.into_iter().flatten().collect())
}
