//! Typed formatting helpers used by the HTML views.

use chrono::DateTime;

/// Render a Unix timestamp (seconds, UTC) as e.g. `Jan  2 15:04:05`.
///
/// Timestamps outside chrono's range fall back to the raw number.
pub fn format_time(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%b %e %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}
