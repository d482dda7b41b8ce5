//! Heuristic timestamp parsing
//!
//! Configuration timestamps arrive as whatever the host's form produced:
//! epoch numbers, numeric strings in seconds or milliseconds, or
//! loosely-formatted date strings with `/` or `-` separators. Everything
//! funnels through [`parse_time`], which resolves to canonical epoch
//! milliseconds or to "no value", never to an error.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chronoline_types::TimeValue;

/// Numeric strings at or above this magnitude are taken as epoch
/// milliseconds; below it they are taken as epoch seconds.
const MILLIS_THRESHOLD: f64 = 1e12;

/// Date-string formats tried after the numeric heuristic, in order.
/// Slashes have already been rewritten to hyphens by this point.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a loose timestamp into epoch milliseconds.
///
/// - `None` stays `None`; so does an empty or whitespace-only string.
/// - Numeric input is passed through as-is: it is already assumed to be
///   epoch milliseconds, and the magnitude heuristic below deliberately
///   does not apply to it.
/// - A string that parses fully as a number gets the magnitude
///   heuristic: values at or above 1e12 are milliseconds, smaller values
///   are seconds and are scaled up.
/// - Otherwise slashes are rewritten to hyphens and the string is tried
///   against the supported date formats. Datetime forms resolve in the
///   local timezone; date-only forms resolve to UTC midnight (ISO
///   date-only semantics).
pub fn parse_time(value: Option<&TimeValue>) -> Option<i64> {
    match value? {
        TimeValue::Millis(n) => Some(*n),
        TimeValue::Number(x) => Some(*x as i64),
        TimeValue::Text(s) => parse_text(s),
    }
}

fn parse_text(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        // "inf"/"NaN" parse as f64 in Rust but are not timestamps.
        if n.is_finite() {
            let millis = if n >= MILLIS_THRESHOLD { n } else { n * 1000.0 };
            return Some(millis as i64);
        }
        return None;
    }

    let normalized = trimmed.replace('/', "-");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.timestamp_millis());
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(local_millis(naive));
        }
    }
    // Date-only forms are UTC midnight, not local.
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive).timestamp_millis());
    }

    None
}

/// Resolve a naive datetime in the local timezone. Ambiguous local times
/// (DST fold) take the earliest mapping; impossible ones (DST gap) fall
/// back to UTC.
fn local_millis(naive: NaiveDateTime) -> i64 {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => Utc.from_utc_datetime(&naive).timestamp_millis(),
    }
}
