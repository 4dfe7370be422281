//! Inclusive date periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Instant;
use crate::error::Result;
use crate::parse::{parse_datetime, parse_dmy};

/// A date range `[start, end]`, inclusive on both ends.
///
/// Endpoints are kept as the caller's strings. How they are read depends on
/// the operation: membership checks parse them as instants, the work
/// schedule generator as `DD-MM-YYYY` calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    /// First member of the period.
    pub start: String,
    /// Last member of the period.
    pub end: String,
}

impl DatePeriod {
    /// Creates a new period.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both endpoints as instants.
    pub fn parse_instants(&self) -> Result<(Instant, Instant)> {
        let start = parse_datetime(&self.start)?;
        let end = parse_datetime(&self.end)?;
        Ok((Instant::from_datetime(&start), Instant::from_datetime(&end)))
    }

    /// Parses both endpoints as `DD-MM-YYYY` calendar dates.
    pub fn parse_dmy_dates(&self) -> Result<(NaiveDate, NaiveDate)> {
        Ok((parse_dmy(&self.start)?, parse_dmy(&self.end)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instants() {
        let p = DatePeriod::new("2024-02-02", "2024-03-02T00:00:00Z");
        let (s, e) = p.parse_instants().unwrap();
        assert!(s < e);
        assert_eq!(e.epoch_ms() - s.epoch_ms(), 29 * 86_400_000);
    }

    #[test]
    fn test_parse_dmy_dates() {
        let p = DatePeriod::new("01-01-2024", "15-01-2024");
        let (s, e) = p.parse_dmy_dates().unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_format() {
        let p = DatePeriod::new("2024-01-01", "2024-01-15");
        assert!(p.parse_dmy_dates().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let p = DatePeriod::new("01-01-2024", "15-01-2024");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"start":"01-01-2024","end":"15-01-2024"}"#);
        let back: DatePeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
