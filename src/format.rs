//! Timestamp conversion and human-readable rendering.
//!
//! | Function | Output | Zone |
//! |----------|--------|------|
//! | [`date_to_timestamp`] | epoch milliseconds | n/a |
//! | [`format_time`] | `hh:mm:ss` (24h) | the value's own zone |
//! | [`format_date`] | `M/D/YYYY, h:mm:ss AM` | UTC |
//! | [`day_name`] | `Sunday`..`Saturday` | UTC |

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

use crate::error::Result;
use crate::models::Instant;

/// English weekday names, indexed by days since Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Converts a date string to milliseconds since the epoch.
///
/// # Examples
///
/// ```
/// use u_calendar::date_to_timestamp;
///
/// assert_eq!(date_to_timestamp("1970-01-01T00:00:01Z").unwrap(), 1000);
/// assert!(date_to_timestamp("yesterday").is_err());
/// ```
pub fn date_to_timestamp(date: &str) -> Result<i64> {
    Instant::parse(date).map(Instant::epoch_ms)
}

/// Renders the wall-clock time of `time` as zero-padded `hh:mm:ss`.
///
/// Uses the components of whatever zone `time` carries; pass a
/// `DateTime<Local>` for host-local output.
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Renders a date string as `M/D/YYYY, h:mm:ss AM|PM` in UTC.
///
/// Month, day and hour carry no leading zero. The hour follows the usual
/// 12-hour convention: midnight is `12:..AM`, noon is `12:..PM`.
///
/// # Examples
///
/// ```
/// use u_calendar::format_date;
///
/// assert_eq!(
///     format_date("2024-03-05T14:07:09Z").unwrap(),
///     "3/5/2024, 2:07:09 PM"
/// );
/// ```
pub fn format_date(date: &str) -> Result<String> {
    let dt = Instant::parse(date)?.to_utc()?;
    let (is_pm, hour) = dt.hour12();
    Ok(format!(
        "{}/{}/{}, {}:{:02}:{:02} {}",
        dt.month(),
        dt.day(),
        dt.year(),
        hour,
        dt.minute(),
        dt.second(),
        if is_pm { "PM" } else { "AM" }
    ))
}

/// Name of the UTC weekday a date string falls on.
pub fn day_name(date: &str) -> Result<&'static str> {
    Ok(weekday_name(Instant::parse(date)?.utc_weekday()))
}

/// English name of a weekday.
#[inline]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}
