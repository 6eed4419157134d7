//! `fireDate` → epoch milliseconds.
//!
//! Accepted text forms, tried in order:
//!   RFC 3339 with offset     2024-01-01T00:00:00Z, 2024-01-01T08:00:00+08:00
//!   RFC 2822                 Mon, 01 Jan 2024 00:00:00 +0000
//!   naive date-time          2024-01-01T09:30[:00[.250]] (`T` or space)
//!   date only                2024-01-01 (UTC midnight)
//!
//! Naive date-times are placed at the configured UTC offset. Numbers are
//! epoch milliseconds.

use crate::request::FireDate;
use crate::types::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

/// Largest representable distance from the epoch, in milliseconds (±100M days).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Resolve a fire date to epoch milliseconds.
pub fn parse_fire_date(fire_date: &FireDate, naive_utc_offset_secs: i32) -> Result<i64> {
    match fire_date {
        FireDate::Timestamp(millis) => timestamp_millis(*millis),
        FireDate::Text(text) => text_millis(text, naive_utc_offset_secs),
    }
}

fn timestamp_millis(millis: f64) -> Result<i64> {
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return Err(Error::date_parse(format!(
            "timestamp out of range: {}",
            millis
        )));
    }
    // Fractional milliseconds truncate toward zero.
    Ok(millis.trunc() as i64)
}

fn text_millis(raw: &str, naive_utc_offset_secs: i32) -> Result<i64> {
    let text = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.timestamp_millis());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Ok(parsed.timestamp_millis());
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        let offset = FixedOffset::east_opt(naive_utc_offset_secs).ok_or_else(|| {
            Error::date_parse(format!(
                "invalid naive UTC offset: {} seconds",
                naive_utc_offset_secs
            ))
        })?;
        return offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.timestamp_millis())
            .ok_or_else(|| Error::date_parse(format!("unrepresentable date: {:?}", raw)));
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }

    Err(Error::date_parse(format!("unrecognized date: {:?}", raw)))
}
