//! Work/off-day schedule generation.
//!
//! Lays a repeating [`WorkPattern`] over an inclusive [`DatePeriod`] and
//! lists the working days.
//!
//! # Algorithm
//!
//! Starting at `period.start`:
//! 1. Emit up to `work_days` consecutive dates, stopping early once the
//!    period end is passed.
//! 2. Skip `off_days` dates without emitting.
//! 3. Repeat until the current date lies after `period.end`.
//!
//! The cycle is anchored at the period start: the first day of the period
//! is always a working day. Both counts must be at least one, otherwise the
//! cycle never advances.
//!
//! # Example
//!
//! ```text
//! period 01-01 .. 15-01, 1 on / 3 off
//!
//! 01 02 03 04 05 06 07 08 09 10 11 12 13 14 15
//!  W  .  .  .  W  .  .  .  W  .  .  .  W  .  .
//! ```

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::error::Result;
use crate::models::{DatePeriod, WorkPattern};
use crate::parse::format_dmy;

/// Lists the working days of a `work_days` on / `off_days` off rotation as
/// `DD-MM-YYYY` strings.
///
/// `period` endpoints must be `DD-MM-YYYY`. An empty list is returned when
/// the end precedes the start.
///
/// # Errors
/// - [`CalendarError::InvalidDate`](crate::CalendarError::InvalidDate) for malformed period endpoints.
/// - [`CalendarError::InvalidArgument`](crate::CalendarError::InvalidArgument) when either count is zero.
///
/// # Examples
///
/// ```
/// use u_calendar::{work_schedule, DatePeriod};
///
/// let period = DatePeriod::new("01-01-2024", "15-01-2024");
/// let days = work_schedule(&period, 1, 3).unwrap();
/// assert_eq!(days, ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
/// ```
#[tracing::instrument(
    level = "debug",
    skip(period),
    fields(start = %period.start, end = %period.end)
)]
pub fn work_schedule(period: &DatePeriod, work_days: u32, off_days: u32) -> Result<Vec<String>> {
    let days = work_schedule_dates(period, WorkPattern::new(work_days, off_days))?;
    Ok(days.map(format_dmy).collect())
}

/// Like [`work_schedule`], but yields calendar dates lazily.
pub fn work_schedule_dates(period: &DatePeriod, pattern: WorkPattern) -> Result<WorkScheduleIter> {
    let (start, end) = period.parse_dmy_dates()?;
    WorkScheduleIter::new(start, end, pattern)
}

/// Iterator over the working days of a rotation.
#[derive(Debug, Clone)]
pub struct WorkScheduleIter {
    current: Option<NaiveDate>,
    end: NaiveDate,
    pattern: WorkPattern,
    /// Days emitted in the current working run.
    run: u32,
}

impl WorkScheduleIter {
    /// Creates an iterator over `[start, end]`.
    ///
    /// # Errors
    /// [`CalendarError::InvalidArgument`](crate::CalendarError::InvalidArgument)
    /// when either count of `pattern` is zero; such a cycle never advances.
    pub fn new(start: NaiveDate, end: NaiveDate, pattern: WorkPattern) -> Result<Self> {
        pattern.validate()?;
        Ok(Self {
            current: Some(start),
            end,
            pattern,
            run: 0,
        })
    }
}

impl Iterator for WorkScheduleIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            // None once stepping passes the last representable date
            let current = self.current?;
            if current > self.end {
                return None;
            }

            if self.run < self.pattern.work_days {
                self.run += 1;
                self.current = current.succ_opt();
                trace!(day = %current, "work day");
                return Some(current);
            }

            self.run = 0;
            self.current = current.checked_add_days(Days::new(u64::from(self.pattern.off_days)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::CalendarError;

    fn period(start: &str, end: &str) -> DatePeriod {
        DatePeriod::new(start, end)
    }

    #[test]
    fn test_one_on_three_off() {
        let days = work_schedule(&period("01-01-2024", "15-01-2024"), 1, 3).unwrap();
        assert_eq!(days, vec!["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
    }

    #[test]
    fn test_multi_day_runs() {
        let days = work_schedule(&period("01-01-2024", "10-01-2024"), 2, 2).unwrap();
        assert_eq!(
            days,
            vec!["01-01-2024", "02-01-2024", "05-01-2024", "06-01-2024", "09-01-2024", "10-01-2024"]
        );
    }

    #[test]
    fn test_run_truncated_at_end() {
        // Third run would be 11..=13 but the period ends on the 11th
        let days = work_schedule(&period("01-01-2024", "11-01-2024"), 3, 2).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days.last().map(String::as_str), Some("11-01-2024"));
    }

    #[test]
    fn test_crosses_month_and_leap_day() {
        let days = work_schedule(&period("27-02-2024", "03-03-2024"), 1, 1).unwrap();
        assert_eq!(days, vec!["27-02-2024", "29-02-2024", "02-03-2024"]);
    }

    #[test]
    fn test_single_day_period() {
        let days = work_schedule(&period("05-05-2024", "05-05-2024"), 4, 3).unwrap();
        assert_eq!(days, vec!["05-05-2024"]);
    }

    #[test]
    fn test_inverted_period_is_empty() {
        let days = work_schedule(&period("10-01-2024", "01-01-2024"), 1, 1).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_zero_counts_rejected() {
        for (work, off) in [(0, 3), (3, 0), (0, 0)] {
            match work_schedule(&period("01-01-2024", "15-01-2024"), work, off) {
                Err(CalendarError::InvalidArgument(e)) => {
                    assert_eq!(e.kind, ValidationErrorKind::InvalidDayCount)
                }
                other => panic!("({work}, {off}): {other:?}"),
            }
        }
    }

    #[test]
    fn test_bad_period_format() {
        assert!(matches!(
            work_schedule(&period("2024-01-01", "15-01-2024"), 1, 1),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_dates_iter_counts() {
        // 4 on / 3 off over 28 days → exactly 4 runs of 4
        let iter = work_schedule_dates(&period("01-01-2024", "28-01-2024"), WorkPattern::new(4, 3))
            .unwrap();
        let days: Vec<NaiveDate> = iter.collect();
        assert_eq!(days.len(), 16);
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_iter_near_calendar_end() {
        let start = NaiveDate::MAX - Days::new(3);
        let days: Vec<_> = WorkScheduleIter::new(start, NaiveDate::MAX, WorkPattern::new(1, 5))
            .unwrap()
            .collect();
        assert_eq!(days, vec![start]);
    }

    #[test]
    fn test_iter_rejects_zero_counts() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for (work, off) in [(0, 0), (0, 2), (2, 0)] {
            match WorkScheduleIter::new(start, end, WorkPattern::new(work, off)) {
                Err(CalendarError::InvalidArgument(e)) => {
                    assert_eq!(e.kind, ValidationErrorKind::InvalidDayCount)
                }
                other => panic!("({work}, {off}): {other:?}"),
            }
        }
    }
}
