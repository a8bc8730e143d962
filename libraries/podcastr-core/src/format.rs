//! Presentation helpers
//!
//! Durations are shown as `HH:MM:SS` everywhere (listing rows, detail page,
//! player progress). Publish dates are shown in Brazilian Portuguese short
//! form, e.g. `8 jan 21`.

use crate::error::{CoreError, Result};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Display pattern for publish dates
const PUBLISHED_AT_FORMAT: &str = "%-d %b %y";

/// Date-time layouts accepted for `published_at`, tried in order after RFC 3339
const NAIVE_DATE_TIME_LAYOUTS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Format a duration in whole seconds as `HH:MM:SS`
///
/// Hours are not wrapped, so a 100 hour episode renders as `100:00:00`.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a publish date for display (`8 jan 21`)
pub fn format_published_at(published_at: &NaiveDateTime) -> String {
    Utc.from_utc_datetime(published_at)
        .format_localized(PUBLISHED_AT_FORMAT, Locale::pt_BR)
        .to_string()
}

/// Parse the `published_at` field of a content record
///
/// Accepts RFC 3339 timestamps (normalised to UTC), ISO-8601 date-times with
/// either a space or `T` separator, and bare dates (midnight).
pub fn parse_published_at(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_utc());
    }

    for layout in NAIVE_DATE_TIME_LAYOUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
}

/// Parse a duration given as text (`"3981"`, `"3981.6"`)
///
/// Fractional seconds are truncated, matching how the player displays
/// elapsed time.
pub fn parse_duration(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();

    if let Ok(secs) = trimmed.parse::<u64>() {
        return Ok(secs);
    }

    match trimmed.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs.floor() as u64),
        _ => Err(CoreError::InvalidDuration(raw.to_string())),
    }
}
