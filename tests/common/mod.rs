// tests/common/mod.rs
// Canned upstream pages for the three sources, served by `StaticFetcher`.
#![allow(dead_code)]

use scam_of_the_day::ingest::fetcher::StaticFetcher;
use scam_of_the_day::ingest::providers::{ftc, ic3, ssa_oig};

pub const FTC_LISTING: &str = include_str!("../fixtures/ftc_listing.html");
pub const FTC_ARTICLE: &str = include_str!("../fixtures/ftc_article.html");
pub const FTC_ARTICLE_NO_META: &str = include_str!("../fixtures/ftc_article_no_meta.html");
pub const IC3_LISTING: &str = include_str!("../fixtures/ic3_listing.html");
pub const IC3_ARTICLE: &str = include_str!("../fixtures/ic3_article.html");
pub const SSA_LISTING: &str = include_str!("../fixtures/ssa_listing.html");
pub const SSA_ARTICLE: &str = include_str!("../fixtures/ssa_article.html");
pub const SSA_ARTICLE_EMPTY: &str = include_str!("../fixtures/ssa_article_empty.html");

pub const FTC_TOLL: &str = "https://consumer.ftc.gov/consumer-alerts/2024/06/unpaid-toll-text-scam";
pub const FTC_PACKAGE: &str =
    "https://consumer.ftc.gov/consumer-alerts/2024/05/fake-package-delivery-notices";
pub const IC3_LAW_FIRMS: &str = "https://www.ic3.gov/PSA/2024/PSA240529";
pub const IC3_IMPERSONATION: &str = "https://www.ic3.gov/PSA/2024/PSA240610";
pub const SSA_LETTERS: &str = "https://oig.ssa.gov/scam-alerts/2024-03-14/fake-ssa-letters/";
pub const SSA_GIFT_CARDS: &str = "https://oig.ssa.gov/scam-alerts/2024-02-01/gift-card-demands/";

pub fn ftc_pages(f: StaticFetcher) -> StaticFetcher {
    f.with_page(ftc::LISTING_URL, FTC_LISTING)
        .with_page(FTC_TOLL, FTC_ARTICLE)
        .with_page(FTC_PACKAGE, FTC_ARTICLE_NO_META)
}

/// The impersonation PSA is deliberately missing (404).
pub fn ic3_pages(f: StaticFetcher) -> StaticFetcher {
    f.with_page(ic3::LISTING_URL, IC3_LISTING)
        .with_page(IC3_LAW_FIRMS, IC3_ARTICLE)
}

pub fn ssa_pages(f: StaticFetcher) -> StaticFetcher {
    f.with_page(ssa_oig::LISTING_URL, SSA_LISTING)
        .with_page(SSA_LETTERS, SSA_ARTICLE)
        .with_page(SSA_GIFT_CARDS, SSA_ARTICLE_EMPTY)
}

/// Every source up.
pub fn all_sources() -> StaticFetcher {
    ssa_pages(ic3_pages(ftc_pages(StaticFetcher::new())))
}

/// Every listing page down.
pub fn all_down() -> StaticFetcher {
    StaticFetcher::new()
        .with_status(ftc::LISTING_URL, 503)
        .with_status(ic3::LISTING_URL, 500)
        .with_status(ssa_oig::LISTING_URL, 502)
}
