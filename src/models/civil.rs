//! Civil-date construction with field overflow.
//!
//! Builds a calendar date from `(year, month, day)` where `month` and `day`
//! are allowed to fall outside their usual ranges. Excess carries into the
//! neighbouring month or year exactly as a wall calendar would:
//!
//! | Input (y, m, d) | Result |
//! |-----------------|--------|
//! | (2024, 1, 32) | 2024-02-01 |
//! | (2024, 3, 0) | 2024-02-29 |
//! | (2024, 13, 1) | 2025-01-01 |
//! | (2024, 1, -1) | 2023-12-30 |
//!
//! Day 0 of month `m + 1` is therefore the last day of month `m`, which is
//! how month lengths are derived in [`crate::arithmetic`].

use chrono::{NaiveDate, TimeDelta};

use crate::error::{CalendarError, Result};

/// Builds a date from possibly out-of-range month/day fields.
///
/// `month` is 1-based. Fails only when the result leaves chrono's
/// representable range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::models::normalize_ymd;
///
/// let d = normalize_ymd(2024, 1, 32).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// ```
pub fn normalize_ymd(year: i32, month: i64, day: i64) -> Result<NaiveDate> {
    let month0 = month
        .checked_sub(1)
        .ok_or_else(|| CalendarError::out_of_range("month"))?;
    let year = i64::from(year)
        .checked_add(month0.div_euclid(12))
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| CalendarError::out_of_range("year"))?;
    // rem_euclid keeps this in 0..12
    let month = (month0.rem_euclid(12) + 1) as u32;

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalendarError::out_of_range("year"))?;
    day.checked_sub(1)
        .and_then(TimeDelta::try_days)
        .and_then(|delta| first.checked_add_signed(delta))
        .ok_or_else(|| CalendarError::out_of_range("day"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_in_range_is_identity() {
        assert_eq!(normalize_ymd(2024, 2, 29).unwrap(), date(2024, 2, 29));
        assert_eq!(normalize_ymd(1999, 12, 31).unwrap(), date(1999, 12, 31));
    }

    #[test]
    fn test_day_overflow() {
        assert_eq!(normalize_ymd(2024, 1, 32).unwrap(), date(2024, 2, 1));
        assert_eq!(normalize_ymd(2023, 2, 29).unwrap(), date(2023, 3, 1));
        assert_eq!(normalize_ymd(2024, 12, 32).unwrap(), date(2025, 1, 1));
        assert_eq!(normalize_ymd(2024, 1, 366).unwrap(), date(2024, 12, 31));
    }

    #[test]
    fn test_day_zero_is_previous_month_end() {
        assert_eq!(normalize_ymd(2024, 3, 0).unwrap(), date(2024, 2, 29));
        assert_eq!(normalize_ymd(2023, 3, 0).unwrap(), date(2023, 2, 28));
        assert_eq!(normalize_ymd(2024, 1, 0).unwrap(), date(2023, 12, 31));
    }

    #[test]
    fn test_negative_day() {
        assert_eq!(normalize_ymd(2024, 1, -1).unwrap(), date(2023, 12, 30));
    }

    #[test]
    fn test_month_overflow() {
        assert_eq!(normalize_ymd(2024, 13, 1).unwrap(), date(2025, 1, 1));
        assert_eq!(normalize_ymd(2024, 0, 1).unwrap(), date(2023, 12, 1));
        assert_eq!(normalize_ymd(2024, -11, 15).unwrap(), date(2023, 1, 15));
        assert_eq!(normalize_ymd(2024, 25, 1).unwrap(), date(2026, 1, 1));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            normalize_ymd(i32::MAX, 1, 1),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(normalize_ymd(2024, 1, i64::MAX).is_err());
        assert!(normalize_ymd(2024, i64::MIN, 1).is_err());
    }
}
