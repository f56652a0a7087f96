// src/utils.rs
use chrono::{DateTime, Local, NaiveDateTime};
use std::time::Duration;

// Local wall-clock time with microseconds and no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

// Formats std::time::Duration
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

// Formats fractional minutes as "1h 05m" / "12m"
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 0.0 || !minutes.is_finite() { return "Invalid".to_string(); }
    let total = minutes.round() as u64;
    let hours = total / 60;
    let rest = total % 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, rest)
    } else {
        format!("{}m", rest)
    }
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.naive_local().format(TIMESTAMP_FORMAT).to_string()
}

/// Parses timestamps as written by this tool, plus RFC 3339 strings with an offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// Elapsed time between two instants, clamped at zero if the clock went backwards.
pub fn elapsed_between(earlier: DateTime<Local>, later: DateTime<Local>) -> Duration {
    (later - earlier).to_std().unwrap_or(Duration::ZERO)
}
