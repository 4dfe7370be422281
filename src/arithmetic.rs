//! Calendar arithmetic.
//!
//! Month lengths, inclusive period lengths and membership, weekend counts,
//! week numbers, quarters and leap years.
//!
//! Functions taking a generic `D: Datelike` read the calendar fields of the
//! value as given: a `DateTime<Local>` answers in host-local terms, a
//! `NaiveDate` in its own terms. Functions taking strings parse them with
//! [`crate::parse::parse_datetime`] and compare absolute instants.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{CalendarError, Result};
use crate::models::{normalize_ymd, DatePeriod, Instant, MS_PER_DAY};
use crate::validation::{validate_month, validate_order};

/// Number of days in `month` (1-12) of `year`.
///
/// Derived as day 0 of the following month, so leap years need no
/// special case.
///
/// # Errors
/// - [`CalendarError::InvalidArgument`] if `month` is outside `1..=12`.
/// - [`CalendarError::OutOfRange`] if the following month is not
///   representable, which happens only for December of chrono's last
///   supported year.
///
/// # Examples
///
/// ```
/// use u_calendar::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024).unwrap(), 29);
/// assert_eq!(days_in_month(2, 2023).unwrap(), 28);
/// ```
pub fn days_in_month(month: u32, year: i32) -> Result<u32> {
    validate_month(month)?;
    Ok(normalize_ymd(year, i64::from(month) + 1, 0)?.day())
}

/// Number of days in `[start, end]`, counting both endpoints.
///
/// Computed as whole days elapsed between the two instants plus one; a
/// partial trailing day does not count.
///
/// # Errors
/// - [`CalendarError::InvalidDate`] if either string fails to parse.
/// - [`CalendarError::InvalidArgument`] if `end` precedes `start`.
pub fn days_in_period(start: &str, end: &str) -> Result<i64> {
    let (start, end) = DatePeriod::new(start, end).parse_instants()?;
    validate_order(&start, &end)?;
    Ok((end.epoch_ms() - start.epoch_ms()) / MS_PER_DAY + 1)
}

/// Whether `date` lies within `period`, endpoints included.
pub fn is_date_in_period(date: &str, period: &DatePeriod) -> Result<bool> {
    let date = Instant::parse(date)?;
    let (start, end) = period.parse_instants()?;
    Ok(start <= date && date <= end)
}

/// Number of Saturdays and Sundays in `month` (1-12) of `year`.
#[tracing::instrument(level = "debug")]
pub fn weekends_in_month(month: u32, year: i32) -> Result<u32> {
    let len = days_in_month(month, year)?;
    let mut weekends = 0;
    for day in 1..=len {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::out_of_range("day"))?;
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            weekends += 1;
        }
    }
    Ok(weekends)
}

/// Week of the year, with week 1 starting on January 1.
///
/// Unlike ISO-8601, week 1 is always the (possibly partial) week holding
/// January 1; every later week starts on a Monday. Results range over
/// `1..=54`.
///
/// # Algorithm
/// `ceil((days_since_jan1 + offset) / 7)` where `offset` is January 1's
/// weekday numbered Monday = 1 .. Sunday = 7.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::week_number;
///
/// let d = NaiveDate::from_ymd_opt(2024, 2, 23).unwrap();
/// assert_eq!(week_number(&d), 8);
/// ```
pub fn week_number<D: Datelike>(date: &D) -> u32 {
    let elapsed = date.ordinal0();
    // Weekday of January 1, counted back from the date's own weekday
    let jan1_from_monday = (date.weekday().num_days_from_monday() + 7 - elapsed % 7) % 7;
    let offset = jan1_from_monday + 1;
    (elapsed + offset).div_ceil(7)
}

/// Quarter of the year (1-4) the date's month falls in.
#[inline]
pub fn quarter<D: Datelike>(date: &D) -> u32 {
    date.month0() / 3 + 1
}

/// Whether the year of `date` is a Gregorian leap year.
#[inline]
pub fn is_leap_year<D: Datelike>(date: &D) -> bool {
    is_leap_year_number(date.year())
}

/// Whether `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries not divisible by 400.
#[inline]
pub const fn is_leap_year_number(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
