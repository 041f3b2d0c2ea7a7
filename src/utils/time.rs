//! Time utilities: date keys for archives and elapsed-time formatting.

use chrono::{DateTime, Utc};

/// UTC calendar date of `t`, formatted `YYYY-MM-DD`. Archive keys are
/// derived from this, so a day rolls over at midnight UTC everywhere.
pub fn date_key(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d").to_string()
}

/// Today's archive key.
pub fn today_key() -> String {
    date_key(Utc::now())
}

/// Whole minutes and leftover seconds between `from` and `now`,
/// floor-divided. Negative spans clamp to zero.
pub fn elapsed_parts(from: DateTime<Utc>, now: DateTime<Utc>) -> (i64, i64) {
    let secs = (now - from).num_seconds().max(0);
    (secs / 60, secs % 60)
}

/// Elapsed span rendered as e.g. "3m 42s".
pub fn format_elapsed(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (m, s) = elapsed_parts(from, now);
    format!("{}m {}s", m, s)
}
