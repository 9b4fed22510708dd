// tests/feed_aggregation.rs
// Aggregator over the real source profiles with canned pages:
// partial failure, total failure, merge order, cache reuse.

mod common;

use std::sync::Arc;
use std::time::Duration;

use scam_of_the_day::cache::{NoopFeedCache, TtlFeedCache};
use scam_of_the_day::config::ListingUrls;
use scam_of_the_day::ingest::fetcher::StaticFetcher;
use scam_of_the_day::ingest::providers::{default_collectors, ic3};
use scam_of_the_day::FeedService;

use common::*;

fn service(fetcher: Arc<StaticFetcher>, cache_ttl: Option<Duration>) -> FeedService {
    let collectors = default_collectors(fetcher, &ListingUrls::default());
    match cache_ttl {
        Some(ttl) => FeedService::new(collectors, Arc::new(TtlFeedCache::new(ttl))),
        None => FeedService::new(collectors, Arc::new(NoopFeedCache)),
    }
}

#[tokio::test]
async fn feed_merges_sources_in_fixed_order() {
    let svc = service(Arc::new(all_sources()), None);
    let feed = svc.build_feed().await;

    let sources: Vec<_> = feed.scams.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, ["FTC", "FTC", "FBI IC3", "SSA OIG", "SSA OIG"]);

    let mut urls: Vec<_> = feed.scams.iter().map(|r| r.source_url.clone()).collect();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), feed.len(), "source urls must be unique");
}

#[tokio::test]
async fn one_source_down_still_yields_the_others() {
    let fetcher = ssa_pages(ftc_pages(StaticFetcher::new())).with_status(ic3::LISTING_URL, 503);
    let svc = service(Arc::new(fetcher), None);

    let feed = svc.build_feed().await;
    assert!(!feed.is_empty());
    assert!(feed.scams.iter().all(|r| r.source != "FBI IC3"));
    assert!(feed.scams.iter().any(|r| r.source == "FTC"));
    assert!(feed.scams.iter().any(|r| r.source == "SSA OIG"));
}

#[tokio::test]
async fn every_source_down_yields_an_empty_feed() {
    let svc = service(Arc::new(all_down()), None);
    let feed = svc.build_feed().await;
    assert!(feed.is_empty());
}

#[tokio::test]
async fn second_build_within_ttl_makes_no_upstream_calls() {
    let fetcher = Arc::new(all_sources());
    let svc = service(fetcher.clone(), Some(Duration::from_secs(3600)));

    let first = svc.build_feed().await;
    let calls_after_first = fetcher.calls();
    assert!(calls_after_first > 0);

    let second = svc.build_feed().await;
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(fetcher.calls(), calls_after_first);
}

#[tokio::test]
async fn expired_cache_rebuilds_with_a_new_value() {
    let fetcher = Arc::new(all_sources());
    let svc = service(fetcher.clone(), Some(Duration::from_millis(30)));

    let first = svc.build_feed().await;
    let calls_after_first = fetcher.calls();

    tokio::time::sleep(Duration::from_millis(150)).await;

    let second = svc.build_feed().await;
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(fetcher.calls(), calls_after_first * 2);
    assert_eq!(first.scams, second.scams);
    assert!(second.generated_at >= first.generated_at);
}
