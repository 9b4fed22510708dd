// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod cache;
pub mod config;
pub mod feed;
pub mod ingest;
pub mod metrics;
pub mod picker;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::api::AppState;
use crate::cache::TtlFeedCache;
use crate::config::AppConfig;
use crate::ingest::fetcher::{HtmlFetcher, HttpFetcher};
use crate::ingest::providers::default_collectors;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::feed::{FeedProvider, FeedService};
pub use crate::ingest::types::{Feed, ScamRecord};

/// Production router: env/file config, live upstream fetches.
pub async fn app() -> anyhow::Result<Router> {
    let cfg = AppConfig::load()?;
    build_app(&cfg)
}

pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let fetcher: Arc<dyn HtmlFetcher> = Arc::new(HttpFetcher::new()?);
    build_app_with_fetcher(cfg, fetcher)
}

/// Same wiring as [`build_app`] with an injected fetcher (offline runs, tests).
pub fn build_app_with_fetcher(
    cfg: &AppConfig,
    fetcher: Arc<dyn HtmlFetcher>,
) -> anyhow::Result<Router> {
    let collectors = default_collectors(fetcher, &cfg.listing_urls);
    let cache = Arc::new(TtlFeedCache::new(cfg.cache_ttl()));
    let service = Arc::new(FeedService::new(collectors, cache));

    let mut router = api::router(AppState::new(service));
    if crate::metrics::debug_routes_enabled() {
        let m = crate::metrics::Metrics::init()?;
        router = router.merge(m.router());
        info!("debug routes enabled: /metrics");
    }
    Ok(router)
}
