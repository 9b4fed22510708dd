use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Env gate for `/metrics` (and any future diagnostics routes).
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder once per process and describe the
    /// feed series. Later calls return the same handle.
    pub fn init() -> anyhow::Result<&'static Metrics> {
        static METRICS: OnceCell<Metrics> = OnceCell::new();
        METRICS.get_or_try_init(|| {
            // Use default buckets to avoid API differences across crate versions.
            let handle = PrometheusBuilder::new().install_recorder()?;
            describe();
            Ok(Metrics { handle })
        })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub fn debug_routes_enabled() -> bool {
    std::env::var(ENV_DEBUG_ROUTES).ok().as_deref() == Some("1")
}

fn describe() {
    describe_counter!("feed_builds_total", "Uncached feed builds.");
    describe_counter!("feed_cache_hits_total", "Feed requests served from cache.");
    describe_counter!("feed_cache_misses_total", "Feed requests that triggered a rebuild.");
    describe_counter!(
        "collector_errors_total",
        "Collectors whose listing fetch failed, by source."
    );
    describe_counter!(
        "articles_skipped_total",
        "Articles dropped because their page could not be fetched, by source."
    );
    describe_gauge!("feed_records", "Records in the most recently built feed.");
    describe_histogram!("feed_build_ms", "Uncached feed build time in milliseconds.");
}
