// src/ingest/extract.rs
//! Markup extraction: candidate links from listing pages, and a short
//! description from article pages.
//!
//! Everything here is synchronous and takes raw markup, so it can be tested
//! against canned fixtures without network access. `scraper::Html` is not
//! `Send`; it never outlives a single call.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::ingest::normalize_whitespace;
use crate::ingest::types::CandidateLink;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("anchor selector"));
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).expect("meta selector"));
static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:description"]"#).expect("og selector"));
static ARTICLE_P: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article p").expect("article selector"));
static MAIN_P: Lazy<Selector> = Lazy::new(|| Selector::parse("main p").expect("main selector"));

/// Which listing-page anchors count as article links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFilter {
    /// Substring the raw `href` must contain.
    pub href_contains: String,
    /// Absolute URL to reject (the listing page linking to itself).
    pub exclude_url: Option<String>,
}

impl LinkFilter {
    pub fn containing(pattern: &str) -> Self {
        Self {
            href_contains: pattern.to_string(),
            exclude_url: None,
        }
    }

    pub fn excluding(mut self, url: &str) -> Self {
        self.exclude_url = Some(url.to_string());
        self
    }

    fn accepts(&self, href: &str, absolute: &str) -> bool {
        if !href.contains(&self.href_contains) {
            return false;
        }
        match &self.exclude_url {
            Some(ex) => ex.trim_end_matches('/') != absolute.trim_end_matches('/'),
            None => true,
        }
    }
}

/// Resolve `href` against `origin`; absolute hrefs pass through.
pub fn resolve_href(origin: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    origin.join(href).ok().map(String::from)
}

/// Every anchor on the page that passes `filter`, in document order.
/// Links with an empty title or URL are dropped. No dedup, no cap.
pub fn extract_links(markup: &str, origin: &Url, filter: &LinkFilter) -> Vec<CandidateLink> {
    let doc = Html::parse_document(markup);
    let mut out = Vec::new();

    for a in doc.select(&ANCHOR) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        let Some(url) = resolve_href(origin, href) else {
            continue;
        };
        if !filter.accepts(href, &url) {
            continue;
        }
        let title = normalize_whitespace(&element_text(a));
        if title.is_empty() {
            continue;
        }
        out.push(CandidateLink { title, url });
    }

    out
}

/// A single way of pulling a description out of an article page.
pub type DescriptionStrategy = fn(&Html) -> Option<String>;

/// Tried in order; the first present, non-empty value wins.
pub const DESCRIPTION_STRATEGIES: &[(&str, DescriptionStrategy)] = &[
    ("meta-description", meta_description),
    ("og-description", og_description),
    ("article-paragraph", article_paragraph),
    ("main-paragraph", main_paragraph),
];

/// Run [`DESCRIPTION_STRATEGIES`] over the page. Returns the raw
/// (whitespace-normalized) text; summary capping happens later.
pub fn extract_description(markup: &str) -> Option<String> {
    let doc = Html::parse_document(markup);
    DESCRIPTION_STRATEGIES.iter().find_map(|(name, strategy)| {
        let found = strategy(&doc)?;
        tracing::trace!(strategy = name, "description found");
        Some(found)
    })
}

pub fn meta_description(doc: &Html) -> Option<String> {
    meta_content(doc, &META_DESCRIPTION)
}

pub fn og_description(doc: &Html) -> Option<String> {
    meta_content(doc, &OG_DESCRIPTION)
}

pub fn article_paragraph(doc: &Html) -> Option<String> {
    first_paragraph(doc, &ARTICLE_P)
}

pub fn main_paragraph(doc: &Html) -> Option<String> {
    first_paragraph(doc, &MAIN_P)
}

fn meta_content(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel)
        .filter_map(|m| m.value().attr("content"))
        .map(normalize_whitespace)
        .find(|s| !s.is_empty())
}

fn first_paragraph(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel)
        .map(|p| normalize_whitespace(&element_text(p)))
        .find(|s| !s.is_empty())
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}
