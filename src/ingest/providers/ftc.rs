// src/ingest/providers/ftc.rs
//! FTC consumer alerts (consumer.ftc.gov).

use super::{SourceProfile, GENERIC_AVOID};
use crate::ingest::extract::LinkFilter;

pub const LISTING_URL: &str = "https://consumer.ftc.gov/consumer-alerts";

const RED_FLAGS: &[&str] = &[
    "Someone contacts you out of the blue claiming to be from a company or agency you know",
    "You're told to act right now or something bad will happen",
    "You're asked to pay with a gift card, wire transfer, payment app, or cryptocurrency",
    "You're asked to confirm personal or account information",
];

pub fn profile() -> SourceProfile {
    SourceProfile {
        tag: "ftc",
        source: "FTC",
        category: "Consumer Alert",
        listing_url: LISTING_URL.to_string(),
        // Article links look like /consumer-alerts/2024/05/some-slug;
        // pagination (/consumer-alerts?page=2) has no trailing slash segment.
        filter: LinkFilter::containing("/consumer-alerts/"),
        fallback_summary: "The Federal Trade Commission is warning consumers about this scam. \
            Read the full alert to learn how it works and how to protect yourself.",
        red_flags: RED_FLAGS,
        avoid: GENERIC_AVOID,
    }
}
