// src/ingest/types.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized scam alert, regardless of which agency published it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScamRecord {
    pub id: String,        // "<source-tag>:<sourceUrl>"
    pub title: String,
    pub category: String,
    pub source: String,    // e.g. "FTC", "FBI IC3"
    pub source_url: String, // dedup key
    pub looks_like: String,
    pub avoid: Vec<String>,
    pub red_flags: Vec<String>,
    /// Upstream pages don't expose a reliable publish date; always `None`.
    pub published: Option<String>,
}

/// The merged, deduplicated set of records plus the time it was built.
/// Never mutated after construction; a rebuild installs a new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub generated_at: DateTime<Utc>,
    pub scams: Vec<ScamRecord>,
}

impl Feed {
    pub fn new(scams: Vec<ScamRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            scams,
        }
    }

    pub fn len(&self) -> usize {
        self.scams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scams.is_empty()
    }
}

/// A link found on a listing page, before the article itself is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    pub title: String,
    pub url: String, // absolute
}

/// One upstream source's full discovery + enrichment pipeline.
///
/// An `Err` means the listing page itself could not be fetched; per-article
/// problems are absorbed by the implementation.
#[async_trait::async_trait]
pub trait SourceCollector: Send + Sync {
    async fn collect(&self) -> Result<Vec<ScamRecord>>;
    fn name(&self) -> &'static str;
}
