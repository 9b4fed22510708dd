// src/ingest/mod.rs
pub mod extract;
pub mod fetcher;
pub mod providers;
pub mod types;

use crate::ingest::types::ScamRecord;
use once_cell::sync::OnceCell;
use regex::Regex;
use std::collections::HashSet;

/// Upper bound for `looksLike`, not counting the ellipsis.
pub const SUMMARY_MAX_CHARS: usize = 360;
pub const ELLIPSIS: char = '\u{2026}';

fn whitespace_re() -> &'static Regex {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Collapse every whitespace run to one space and trim.
///
/// Entities that survived HTML parsing (double-encoded `&amp;#39;` and
/// friends) are decoded first.
pub fn normalize_whitespace(s: &str) -> String {
    let decoded = html_escape::decode_html_entities(s);
    whitespace_re().replace_all(&decoded, " ").trim().to_string()
}

/// Normalize article text for `looksLike`: whitespace, straight quotes,
/// then cap at [`SUMMARY_MAX_CHARS`] on a word boundary.
pub fn normalize_summary(s: &str) -> String {
    let out = normalize_whitespace(s)
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");
    truncate_on_word(&out, SUMMARY_MAX_CHARS)
}

/// Cut `s` to at most `max` chars without splitting a word and append `…`.
/// Strings already within the limit are returned unchanged.
pub fn truncate_on_word(s: &str, max: usize) -> String {
    let Some((cut, _)) = s.char_indices().nth(max) else {
        return s.to_string();
    };

    let head = &s[..cut];
    let on_boundary = s[cut..].starts_with(char::is_whitespace);
    let kept = if on_boundary {
        head
    } else {
        // A single unbroken token longer than `max` has no boundary to fall back to.
        head.rfind(char::is_whitespace)
            .map(|i| &head[..i])
            .unwrap_or(head)
    };

    let mut out = kept.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

/// Keep the first item for every key, preserving order.
pub fn dedup_by<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|it| seen.insert(key(it).to_string()))
        .collect()
}

/// Drop records whose `source_url` was already seen; the first one wins.
pub fn dedup_by_url(records: Vec<ScamRecord>) -> Vec<ScamRecord> {
    dedup_by(records, |r| r.source_url.as_str())
}
