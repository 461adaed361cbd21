//! Date parsing and day arithmetic for expiry calculations.
//!
//! Accepted expiry/purchase date formats:
//! - `YYYY-MM-DD` (midnight UTC)
//! - RFC3339
//! - `YYYY-MM-DDTHH:MM:SS` without offset (UTC)
//! - Unix timestamp string, seconds or milliseconds

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{CoreError, CoreResult};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parses a stored date string into a UTC instant.
///
/// `field` only names the column in the returned [`CoreError::MalformedDate`].
pub fn parse_date(field: &str, value: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = value.trim();
    let malformed = || CoreError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    if trimmed.is_empty() {
        return Err(malformed());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(malformed);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }

    trimmed
        .parse::<i64>()
        .ok()
        .and_then(parse_unix_timestamp)
        .ok_or_else(malformed)
}

/// Whole days from `now` until `expiry`, rounded up.
///
/// 23.1 hours left counts as 1 day; 16.5 days past counts as -16.
#[must_use]
pub fn days_remaining(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiry - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
