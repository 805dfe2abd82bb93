//! Timestamp formatting for note cards.
//!
//! Every formatter returns an empty string for an out-of-range timestamp
//! rather than failing the render.

use std::fmt::Display;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

/// Medium date followed by a short time, e.g. `Oct 18, 2026, 3:04 PM`.
const MEDIUM_DATE_SHORT_TIME: &str = "%b %-d, %Y, %-I:%M %p";

/// Format a Unix-ms timestamp in the local time zone.
pub fn format_timestamp(created_at_ms: i64) -> String {
    format_timestamp_in(created_at_ms, &Local)
}

/// Format a Unix-ms timestamp in an explicit time zone.
pub fn format_timestamp_in<Tz>(created_at_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::<Utc>::from_timestamp_millis(created_at_ms)
        .map(|utc| {
            utc.with_timezone(tz)
                .format(MEDIUM_DATE_SHORT_TIME)
                .to_string()
        })
        .unwrap_or_default()
}

/// RFC 3339 UTC timestamp with milliseconds, e.g. `2026-10-18T15:04:05.000Z`.
pub fn iso_timestamp(created_at_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(created_at_ms)
        .map(|utc| utc.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Coarse age of a timestamp relative to `now_ms`.
pub fn relative_time(created_at_ms: i64, now_ms: i64) -> String {
    let delta = now_ms.saturating_sub(created_at_ms).max(0);

    if delta < 60_000 {
        "just now".to_string()
    } else if delta < 3_600_000 {
        format!("{}m ago", delta / 60_000)
    } else if delta < 86_400_000 {
        format!("{}h ago", delta / 3_600_000)
    } else {
        format!("{}d ago", delta / 86_400_000)
    }
}
