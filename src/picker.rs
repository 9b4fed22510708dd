//! Deterministic "scam of the day" selection.
//!
//! The index is `fnv1a_32(date) % count`, so the same date string always
//! maps to the same slot for a given feed size. A rebuild that changes the
//! feed length may move the pick.

use chrono::Local;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the Unicode scalar values of `s`.
pub fn fnv1a_32(s: &str) -> u32 {
    s.chars().fold(FNV_OFFSET_BASIS, |hash, c| {
        (hash ^ c as u32).wrapping_mul(FNV_PRIME)
    })
}

/// Index into a feed of `count` records for `date`. Zero when `count` is zero.
pub fn pick_index_for_date(date: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (fnv1a_32(date) as usize) % count
}

/// Today's local calendar date as `YYYY-MM-DD`.
pub fn today_local() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
