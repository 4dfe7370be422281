//! Forward searches for particular weekdays.
//!
//! Both searches return a fresh value and leave their input untouched.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::trace;

use crate::error::Result;
use crate::models::{normalize_ymd, Instant};

/// The next Friday strictly after `date`, at the same time of day.
///
/// The weekday is read in UTC. A Friday input yields the Friday one week
/// later; Saturday yields six days later.
///
/// # Examples
///
/// ```
/// use u_calendar::{next_friday, Instant};
///
/// let wed = Instant::parse("2024-02-21T08:00:00Z").unwrap();
/// let fri = next_friday(wed).unwrap();
/// assert_eq!(fri.to_string(), "2024-02-23T08:00:00.000Z");
/// ```
pub fn next_friday(date: Instant) -> Result<Instant> {
    let current = i64::from(date.utc_weekday().num_days_from_sunday());
    let mut added_days = 5 - current;
    if current >= 5 {
        added_days += 7;
    }
    date.add_days(added_days)
}

/// The first Friday the 13th on or after the calendar day of `date`.
///
/// # Algorithm
/// Keeps `(year, month)` fixed and increments the day number, letting
/// [`normalize_ymd`] roll day overflow into later months and years. Friday
/// the 13th occurs at least once every 14 months, so the scan visits at
/// most ~430 days.
///
/// # Errors
/// [`CalendarError::OutOfRange`](crate::CalendarError::OutOfRange) only if
/// the scan runs off the end of the representable calendar.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::next_friday_the_13th;
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();
/// let found = next_friday_the_13th(&from).unwrap();
/// assert_eq!(found, NaiveDate::from_ymd_opt(2024, 9, 13).unwrap());
/// ```
#[tracing::instrument(
    level = "debug",
    skip(date),
    fields(year = date.year(), month = date.month(), day = date.day())
)]
pub fn next_friday_the_13th<D: Datelike>(date: &D) -> Result<NaiveDate> {
    let (year, month) = (date.year(), i64::from(date.month()));
    let mut day = i64::from(date.day());
    loop {
        let candidate = normalize_ymd(year, month, day)?;
        if candidate.day() == 13 && candidate.weekday() == Weekday::Fri {
            trace!(%candidate, scanned = day - i64::from(date.day()), "found Friday the 13th");
            return Ok(candidate);
        }
        day += 1;
    }
}
