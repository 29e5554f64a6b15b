//! Duration and time-label formatting helpers

use regex::Regex;
use std::sync::LazyLock;

// Trailing H:MM:SS with one-or-more hour digits; any "N days" prefix is
// outside the match and gets dropped.
static DURATION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d{2}):(\d{2})$").expect("Invalid duration regex"));

/// Normalize a free-form elapsed-time string to `HH:MM:SS`.
///
/// Matches the trailing `<hours>:<minutes>:<seconds>` pattern and
/// zero-pads the hour component to at least two digits. Input that does
/// not match passes through verbatim; malformed values never error.
/// Idempotent.
pub fn format_duration(raw: &str) -> String {
    match DURATION_SUFFIX.captures(raw) {
        Some(caps) => format!("{:0>2}:{}:{}", &caps[1], &caps[2], &caps[3]),
        None => raw.to_string(),
    }
}

/// Render a seconds value as `MM:SS`. NaN and zero render as `00:00`.
/// Fractional seconds are truncated, not rounded.
pub fn seconds_to_clock(seconds: f64) -> String {
    if seconds.is_nan() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    let total = seconds as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Chart axis label for an hour bucket, e.g. `9` → `"9:00"`.
pub fn hour_label(hour: u32) -> String {
    format!("{}:00", hour)
}
