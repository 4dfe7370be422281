//! Absolute points in time.
//!
//! # Time Model
//! An [`Instant`] counts milliseconds since 1970-01-01T00:00:00Z. It carries
//! no timezone; calendar fields are obtained by projecting it into UTC
//! ([`Instant::to_utc`]) or any other zone ([`Instant::with_timezone`]).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, SecondsFormat, TimeDelta, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::normalize_ymd;
use crate::error::{CalendarError, Result};

/// Milliseconds in one (UTC) day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Weekdays indexed by days since Monday.
const WEEK_FROM_MONDAY: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A point in time with millisecond precision.
///
/// Serializes as the bare epoch-millisecond integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant {
    epoch_ms: i64,
}

impl Instant {
    /// 1970-01-01T00:00:00Z.
    pub const EPOCH: Instant = Instant { epoch_ms: 0 };

    /// Creates an instant from milliseconds since the epoch.
    pub const fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Parses a date string in any of the formats accepted by
    /// [`parse_datetime`](crate::parse::parse_datetime).
    pub fn parse(input: &str) -> Result<Self> {
        crate::parse::parse_datetime(input).map(|dt| Self::from_datetime(&dt))
    }

    /// Builds an instant from UTC calendar components.
    ///
    /// Every component may overflow its usual range and carries into the
    /// next larger unit: `(2024, 1, 31, 24, 0, 0)` is 2024-02-01T00:00:00Z,
    /// `(2024, 3, 0, ..)` falls on the last day of February.
    pub fn from_components(
        year: i32,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Result<Self> {
        let date = normalize_ymd(year, month, day)?;
        let seconds = hour
            .checked_mul(3600)
            .zip(minute.checked_mul(60))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(second))
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| CalendarError::out_of_range("time of day"))?;
        let dt = date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .checked_add_signed(seconds)
            .ok_or_else(|| CalendarError::out_of_range("time of day"))?;
        Ok(Self::from_datetime(&dt))
    }

    /// Captures the instant a zoned date-time refers to.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            epoch_ms: dt.timestamp_millis(),
        }
    }

    /// Milliseconds since the epoch.
    #[inline]
    pub const fn epoch_ms(self) -> i64 {
        self.epoch_ms
    }

    /// Projects the instant onto the UTC calendar.
    pub fn to_utc(self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch_ms)
            .ok_or_else(|| CalendarError::out_of_range("instant"))
    }

    /// Projects the instant onto the calendar of `tz`.
    pub fn with_timezone<Tz: TimeZone>(self, tz: &Tz) -> Result<DateTime<Tz>> {
        Ok(self.to_utc()?.with_timezone(tz))
    }

    /// Day of the week in UTC.
    pub fn utc_weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday (index 3 from Monday)
        let days = self.epoch_ms.div_euclid(MS_PER_DAY);
        WEEK_FROM_MONDAY[(days + 3).rem_euclid(7) as usize]
    }

    /// Returns the instant `days` whole days later (earlier if negative).
    pub fn add_days(self, days: i64) -> Result<Self> {
        days.checked_mul(MS_PER_DAY)
            .and_then(|delta| self.epoch_ms.checked_add(delta))
            .map(Self::from_epoch_ms)
            .ok_or_else(|| CalendarError::out_of_range("instant"))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl FromStr for Instant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Ok(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Err(_) => write!(f, "@{}ms", self.epoch_ms),
        }
    }
}
