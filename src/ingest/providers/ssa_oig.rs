// src/ingest/providers/ssa_oig.rs
//! Social Security Administration Office of the Inspector General scam alerts.

use super::SourceProfile;
use crate::ingest::extract::LinkFilter;

pub const LISTING_URL: &str = "https://oig.ssa.gov/scam-alerts/";

const RED_FLAGS: &[&str] = &[
    "A caller says your Social Security number is suspended or linked to a crime",
    "Threats of arrest or legal action unless you pay immediately",
    "Demands for payment by gift card, cash by mail, wire transfer, or cryptocurrency",
    "Emails or texts with attachments, badges, or links claiming to be from SSA",
];

const AVOID: &[&str] = &[
    "Hang up on anyone who says your Social Security number has been suspended.",
    "Social Security will never threaten arrest or demand immediate payment.",
    "Never pay a government agency with gift cards, cash by mail, wire transfers, or cryptocurrency.",
    "Don't trust caller ID or official-looking documents; call SSA directly at 1-800-772-1213.",
    "Report Social Security impersonation scams at oig.ssa.gov.",
];

pub fn profile() -> SourceProfile {
    SourceProfile {
        tag: "ssa-oig",
        source: "SSA OIG",
        category: "Scam Alert",
        listing_url: LISTING_URL.to_string(),
        filter: LinkFilter::containing("/scam-alerts/").excluding(LISTING_URL),
        fallback_summary: "The Social Security Administration's Office of the Inspector General \
            is warning the public about this scam. Read the full alert for details.",
        red_flags: RED_FLAGS,
        avoid: AVOID,
    }
}
