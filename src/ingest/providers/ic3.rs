// src/ingest/providers/ic3.rs
//! FBI Internet Crime Complaint Center public service announcements.

use super::{SourceProfile, GENERIC_AVOID};
use crate::ingest::extract::LinkFilter;

pub const LISTING_URL: &str = "https://www.ic3.gov/PSA";

const RED_FLAGS: &[&str] = &[
    "Unsolicited calls, texts, or emails asking you to move money or invest",
    "Someone impersonating the FBI, law enforcement, or a government official",
    "Requests for remote access to your computer or phone",
    "Payment demanded in cryptocurrency, by wire, or in cash",
];

pub fn profile() -> SourceProfile {
    SourceProfile {
        tag: "ic3",
        source: "FBI IC3",
        category: "Public Service Announcement",
        listing_url: LISTING_URL.to_string(),
        // PSAs live under a year directory: /PSA/2024/PSA240529
        filter: LinkFilter::containing("/PSA/20"),
        fallback_summary: "The FBI's Internet Crime Complaint Center issued a public service \
            announcement about this fraud. Read the full PSA for details and reporting guidance.",
        red_flags: RED_FLAGS,
        avoid: GENERIC_AVOID,
    }
}
