// src/ingest/fetcher.rs
//! Raw markup retrieval. One GET per call, fixed client identity, no retries.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;
use tracing::debug;

/// Identity sent with every upstream request.
pub const USER_AGENT: &str =
    "scam-of-the-day/0.1 (public scam-alert aggregator; +https://github.com/scam-of-the-day)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

#[async_trait::async_trait]
pub trait HtmlFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by a shared `reqwest::Client`.
/// Redirects and timeouts are whatever reqwest does by default.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        use anyhow::Context;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("building upstream http client")?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HtmlFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;
        debug!(%url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

// --- Offline helper (tests, local demos) ---

/// Serves canned markup by exact URL and counts every call.
/// Unknown URLs answer like a 404.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Result<String, u16>>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(markup.to_string()));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HtmlFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(Ok(markup)) => Ok(markup.clone()),
            Some(Err(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_fetcher_serves_pages_and_counts_calls() {
        let f = StaticFetcher::new()
            .with_page("https://a.test/", "<p>hi</p>")
            .with_status("https://a.test/down", 503);

        assert_eq!(f.fetch("https://a.test/").await.unwrap(), "<p>hi</p>");
        match f.fetch("https://a.test/down").await {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected status error, got {other:?}"),
        }
        assert!(f.fetch("https://a.test/missing").await.is_err());
        assert_eq!(f.calls(), 3);
    }

    #[test]
    fn user_agent_identifies_the_service() {
        assert!(USER_AGENT.starts_with("scam-of-the-day/"));
    }
}
