//! Date-string parsing.
//!
//! # Accepted Forms
//!
//! Tried in order; the first match wins.
//!
//! | Form | Example | Zone |
//! |------|---------|------|
//! | RFC 3339 | `2024-02-01T00:00:00.000Z` | as written |
//! | ISO date-time, no offset | `2024-02-01T10:30:00`, `2024-02-01 10:30` | UTC |
//! | ISO date | `2024-02-01` | UTC midnight |
//! | RFC 2822 | `Thu, 01 Feb 2024 10:00:00 +0000` | as written |
//! | US date (+ time) | `2/1/2024`, `02/01/2024 10:30:00` | UTC |
//! | Slashed ISO date | `2024/02/01` | UTC midnight |
//!
//! Inputs without an offset are read as UTC wall time so that results never
//! depend on the host's timezone. `DD-MM-YYYY` is deliberately *not* in this
//! list: `01-02-2024` would be ambiguous next to the US form, so it is only
//! accepted where a caller asks for it through [`parse_dmy`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use crate::error::{CalendarError, Result};

/// Offsetless date-time layouts, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, read as UTC midnight.
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Layout of work-schedule dates.
pub const DMY_FORMAT: &str = "%d-%m-%Y";

/// Parses a date string into a UTC date-time.
///
/// # Errors
/// [`CalendarError::InvalidDate`] when no accepted form matches.
///
/// # Examples
///
/// ```
/// use u_calendar::parse::parse_datetime;
///
/// let a = parse_datetime("2024-02-01T00:00:00.000Z").unwrap();
/// let b = parse_datetime("2/1/2024").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc());
        }
    }
    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    debug!(input, "unrecognised date string");
    Err(CalendarError::invalid_date(input))
}

/// Parses a strict `DD-MM-YYYY` calendar date.
///
/// # Errors
/// [`CalendarError::InvalidDate`] on any other layout or an impossible date
/// such as `30-02-2024`.
pub fn parse_dmy(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DMY_FORMAT).map_err(|err| {
        debug!(input, %err, "unrecognised DD-MM-YYYY date");
        CalendarError::invalid_date(input)
    })
}

/// Formats a calendar date as `DD-MM-YYYY`.
pub fn format_dmy(date: NaiveDate) -> String {
    date.format(DMY_FORMAT).to_string()
}
