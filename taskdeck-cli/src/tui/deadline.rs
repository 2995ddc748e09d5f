//! Deadline display helpers
//!
//! The server stores `limit` timestamps with a fixed +9h offset relative
//! to the display timezone, so every computation here first subtracts
//! nine hours.

use chrono::{DateTime, Duration, Utc};

const STORAGE_OFFSET_HOURS: i64 = 9;

/// Normalize a stored timestamp into display time.
fn display_time(limit: DateTime<Utc>) -> DateTime<Utc> {
    limit - Duration::hours(STORAGE_OFFSET_HOURS)
}

/// Format a deadline as `YYYY-MM-DD-HH-MM`.
pub fn format_deadline(limit: DateTime<Utc>) -> String {
    display_time(limit).format("%Y-%m-%d-%H-%M").to_string()
}

/// Whole minutes from `now` until the normalized deadline, truncated
/// toward zero. Negative once the deadline has passed.
pub fn remaining_minutes(limit: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (display_time(limit) - now).num_minutes()
}

/// Decompose a minute count into `残り{D}日と{H}時間{M}分`.
///
/// Each division only runs when the remaining count still reaches the
/// unit, and a segment is emitted only when its value is positive;
/// minutes always appear. Negative inputs therefore skip decomposition
/// entirely and render as raw minutes (`残り-1500分`). An "overdue"
/// label was considered and rejected to keep parity with the served
/// behavior (see DESIGN.md).
pub fn format_remaining(minutes: i64) -> String {
    let mut m = minutes;
    let mut days = 0;
    let mut hours = 0;
    if m >= 1440 {
        days = m / 1440;
        m %= 1440;
    }
    if m >= 60 {
        hours = m / 60;
        m %= 60;
    }

    let mut out = String::from("残り");
    if days > 0 {
        out.push_str(&format!("{}日と", days));
    }
    if hours > 0 {
        out.push_str(&format!("{}時間", hours));
    }
    out.push_str(&format!("{}分", m));
    out
}
