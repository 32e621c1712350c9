//! Directory timestamp conversion.
//!
//! Directory timestamps count seconds from 1900-01-01, which is 70 years and
//! 17 leap days before the Unix epoch.

use crate::errors::{CoreError, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Seconds between the directory epoch and the Unix epoch.
pub const ITELEX_EPOCH_OFFSET_SECS: i64 = 60 * 60 * 24 * (365 * 70 + 17);

/// Two-digit day/month/year layout used by the entry tables.
pub const DISPLAY_TIME_FORMAT: &str = "%d.%m.%y, %H:%M";

/// Converts a raw directory timestamp into a UTC datetime.
pub fn decode_timestamp(raw: i64) -> Result<DateTime<Utc>> {
    raw.checked_sub(ITELEX_EPOCH_OFFSET_SECS)
        .and_then(|unix| DateTime::from_timestamp(unix, 0))
        .ok_or(CoreError::TimestampOutOfRange(raw))
}

/// Converts a datetime back into directory seconds. Sub-second precision is dropped.
pub fn encode_timestamp(time: &DateTime<Utc>) -> i64 {
    time.timestamp() + ITELEX_EPOCH_OFFSET_SECS
}

/// Current wall-clock time in directory seconds, as stamped on updated entries.
pub fn current_itelex_timestamp() -> i64 {
    encode_timestamp(&Utc::now())
}

/// Renders a decoded timestamp in the caller's display time zone.
pub fn format_timestamp<Tz>(time: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(zone)
        .format(DISPLAY_TIME_FORMAT)
        .to_string()
}
