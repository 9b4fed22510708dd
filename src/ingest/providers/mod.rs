// src/ingest/providers/mod.rs
//! Per-source collectors.
//!
//! Every source runs the same two phases, driven by its [`SourceProfile`]:
//!
//! 1. **Discovery**: fetch the listing page, keep anchors matching the
//!    source's [`LinkFilter`], dedup by URL, cap at [`MAX_CANDIDATES`].
//! 2. **Enrichment**: fetch each article one at a time and build a
//!    [`ScamRecord`]. An article that fails to fetch is skipped.
//!
//! Only a failed listing fetch fails the collector as a whole.

pub mod ftc;
pub mod ic3;
pub mod ssa_oig;

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::counter;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::ingest::extract::{extract_description, extract_links, LinkFilter};
use crate::ingest::fetcher::{FetchError, HtmlFetcher};
use crate::ingest::types::{CandidateLink, ScamRecord, SourceCollector};
use crate::ingest::{dedup_by, normalize_summary};

/// Hard cap on articles enriched per source and build.
pub const MAX_CANDIDATES: usize = 12;

/// Tips shared by sources without a domain-specific list.
pub const GENERIC_AVOID: &[&str] = &[
    "Slow down. Scammers create urgency so you act before you think.",
    "Never pay with gift cards, wire transfers, or cryptocurrency to someone who contacted you.",
    "Verify the request by contacting the organization through a number or website you already trust.",
    "Don't click links or open attachments in unexpected messages.",
    "Report the scam to the FTC at ReportFraud.ftc.gov and to the FBI at ic3.gov.",
];

/// Static description of one upstream source.
#[derive(Debug, Clone)]
pub struct SourceProfile {
    /// Prefix of every record id, e.g. `ftc`.
    pub tag: &'static str,
    pub source: &'static str,
    pub category: &'static str,
    pub listing_url: String,
    pub filter: LinkFilter,
    /// Used as `looksLike` when no description can be extracted.
    pub fallback_summary: &'static str,
    pub red_flags: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

impl SourceProfile {
    /// Point the profile at another listing page (mirror, staging, fixture).
    /// A self-link exclusion follows the new URL.
    pub fn with_listing_url(mut self, url: &str) -> Self {
        if self.filter.exclude_url.is_some() {
            self.filter.exclude_url = Some(url.to_string());
        }
        self.listing_url = url.to_string();
        self
    }

    /// Scheme + host of the listing page; relative hrefs resolve against it.
    pub fn origin(&self) -> Result<Url> {
        let listing = Url::parse(&self.listing_url)
            .with_context(|| format!("invalid listing url for {}", self.source))?;
        listing
            .join("/")
            .with_context(|| format!("deriving origin for {}", self.source))
    }

    pub fn record(&self, link: &CandidateLink, description: Option<&str>) -> ScamRecord {
        let looks_like = description
            .map(normalize_summary)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.fallback_summary.to_string());

        ScamRecord {
            id: format!("{}:{}", self.tag, link.url),
            title: link.title.clone(),
            category: self.category.to_string(),
            source: self.source.to_string(),
            source_url: link.url.clone(),
            looks_like,
            avoid: self.avoid.iter().map(|s| s.to_string()).collect(),
            red_flags: self.red_flags.iter().map(|s| s.to_string()).collect(),
            published: None,
        }
    }
}

/// Generic scraping collector; one instance per source.
pub struct SiteCollector {
    profile: SourceProfile,
    fetcher: Arc<dyn HtmlFetcher>,
}

impl SiteCollector {
    pub fn new(profile: SourceProfile, fetcher: Arc<dyn HtmlFetcher>) -> Self {
        Self { profile, fetcher }
    }

    pub fn profile(&self) -> &SourceProfile {
        &self.profile
    }

    /// Phase 1: candidate links from the listing page.
    pub async fn discover(&self) -> Result<Vec<CandidateLink>> {
        let origin = self.profile.origin()?;
        let markup = self
            .fetcher
            .fetch(&self.profile.listing_url)
            .await
            .with_context(|| format!("listing fetch for {}", self.profile.source))?;

        let found = extract_links(&markup, &origin, &self.profile.filter);
        let found_count = found.len();
        let mut links = dedup_by(found, |l| l.url.as_str());
        links.truncate(MAX_CANDIDATES);

        debug!(
            source = self.profile.source,
            found = found_count,
            kept = links.len(),
            "discovered candidate links"
        );
        Ok(links)
    }

    /// Phase 2 for a single article.
    pub async fn enrich(&self, link: &CandidateLink) -> Result<ScamRecord, FetchError> {
        let markup = self.fetcher.fetch(&link.url).await?;
        let description = extract_description(&markup);
        Ok(self.profile.record(link, description.as_deref()))
    }
}

#[async_trait]
impl SourceCollector for SiteCollector {
    #[instrument(level = "info", skip(self), fields(source = self.profile.source))]
    async fn collect(&self) -> Result<Vec<ScamRecord>> {
        let links = self.discover().await?;

        let mut out = Vec::with_capacity(links.len());
        for link in &links {
            match self.enrich(link).await {
                Ok(rec) => out.push(rec),
                Err(e) => {
                    warn!(error = %e, url = %link.url, "article fetch failed; skipping");
                    counter!("articles_skipped_total", "source" => self.profile.tag).increment(1);
                }
            }
        }

        info!(candidates = links.len(), count = out.len(), "collected records");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        self.profile.source
    }
}

/// The three production collectors in feed order, sharing one fetcher.
pub fn default_collectors(
    fetcher: Arc<dyn HtmlFetcher>,
    listing_urls: &crate::config::ListingUrls,
) -> Vec<Arc<dyn SourceCollector>> {
    vec![
        Arc::new(SiteCollector::new(
            ftc::profile().with_listing_url(&listing_urls.ftc),
            fetcher.clone(),
        )) as Arc<dyn SourceCollector>,
        Arc::new(SiteCollector::new(
            ic3::profile().with_listing_url(&listing_urls.ic3),
            fetcher.clone(),
        )),
        Arc::new(SiteCollector::new(
            ssa_oig::profile().with_listing_url(&listing_urls.ssa_oig),
            fetcher,
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fetcher::StaticFetcher;

    fn test_profile() -> SourceProfile {
        SourceProfile {
            tag: "t",
            source: "Test",
            category: "Test Alert",
            listing_url: "https://t.test/alerts".into(),
            filter: LinkFilter::containing("/alerts/"),
            fallback_summary: "Generic warning.",
            red_flags: &["Urgency"],
            avoid: &["Hang up"],
        }
    }

    fn listing(n: usize) -> String {
        let mut html = String::from("<ul>");
        for i in 0..n {
            html.push_str(&format!(r#"<li><a href="/alerts/{i}">Alert {i}</a></li>"#));
        }
        // duplicate of the first link
        html.push_str(r#"<li><a href="/alerts/0">Alert zero again</a></li></ul>"#);
        html
    }

    #[test]
    fn record_uses_description_or_fallback() {
        let p = test_profile();
        let link = CandidateLink {
            title: "Fake toll texts".into(),
            url: "https://t.test/alerts/1".into(),
        };
        let with = p.record(&link, Some("  \u{201C}Pay now\u{201D}  "));
        assert_eq!(with.id, "t:https://t.test/alerts/1");
        assert_eq!(with.looks_like, "\"Pay now\"");
        assert_eq!(with.red_flags, vec!["Urgency".to_string()]);
        assert_eq!(with.avoid, vec!["Hang up".to_string()]);
        assert_eq!(with.published, None);

        let without = p.record(&link, None);
        assert_eq!(without.looks_like, "Generic warning.");
    }

    #[test]
    fn origin_strips_path() {
        assert_eq!(test_profile().origin().unwrap().as_str(), "https://t.test/");
    }

    #[test]
    fn listing_override_moves_exclusion() {
        let p = SourceProfile {
            filter: LinkFilter::containing("/alerts/").excluding("https://t.test/alerts/"),
            ..test_profile()
        }
        .with_listing_url("http://mirror.test/alerts/");
        assert_eq!(p.listing_url, "http://mirror.test/alerts/");
        assert_eq!(p.filter.exclude_url.as_deref(), Some("http://mirror.test/alerts/"));
    }

    #[tokio::test]
    async fn discovery_dedups_and_caps() {
        let fetcher = Arc::new(StaticFetcher::new().with_page("https://t.test/alerts", &listing(20)));
        let c = SiteCollector::new(test_profile(), fetcher);
        let links = c.discover().await.unwrap();
        assert_eq!(links.len(), MAX_CANDIDATES);
        assert_eq!(links[0].title, "Alert 0");
        assert_eq!(links[11].url, "https://t.test/alerts/11");
    }

    #[tokio::test]
    async fn failed_articles_are_skipped() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .with_page("https://t.test/alerts", &listing(3))
                .with_page(
                    "https://t.test/alerts/0",
                    r#"<meta name="description" content="Zero">"#,
                )
                .with_status("https://t.test/alerts/1", 500)
                .with_page("https://t.test/alerts/2", "<p>no main region</p>"),
        );
        let c = SiteCollector::new(test_profile(), fetcher.clone());
        let recs = c.collect().await.unwrap();

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].looks_like, "Zero");
        assert_eq!(recs[1].source_url, "https://t.test/alerts/2");
        assert_eq!(recs[1].looks_like, "Generic warning.");
        // listing + three articles, one at a time
        assert_eq!(fetcher.calls(), 4);
    }

    #[tokio::test]
    async fn failed_listing_fails_the_collector() {
        let fetcher = Arc::new(StaticFetcher::new().with_status("https://t.test/alerts", 503));
        let c = SiteCollector::new(test_profile(), fetcher);
        let err = c.collect().await.unwrap_err();
        assert!(format!("{err:#}").contains("listing fetch for Test"));
    }
}
