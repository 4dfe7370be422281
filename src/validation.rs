//! Argument validation for calendar operations.
//!
//! Numeric inputs that would otherwise produce nonsense (or, for the
//! schedule generator, fail to advance) are rejected up front. Detects:
//! - Months outside `1..=12`
//! - Work/off-day counts of zero
//! - Periods whose end precedes their start
//!
//! Validators return a single [`ValidationError`]; callers lift it into
//! [`CalendarError::InvalidArgument`](crate::CalendarError::InvalidArgument)
//! with `?`.

use std::fmt::Debug;

use tracing::debug;

/// Result of a single validation check.
pub type ValidationResult = Result<(), ValidationError>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Month number outside `1..=12`.
    InvalidMonth,
    /// A work or off-day count that is not positive.
    InvalidDayCount,
    /// Period end lies before its start.
    InvertedPeriod,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        debug!(?kind, %message, "rejected calendar argument");
        Self { kind, message }
    }
}

/// Checks that `month` is a 1-based calendar month.
pub fn validate_month(month: u32) -> ValidationResult {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidMonth,
            format!("month {month} is outside 1..=12"),
        ))
    }
}

/// Checks that a cycle day count is at least one.
///
/// `label` names the count in the error message (e.g. `"work days"`).
pub fn validate_day_count(label: &str, count: u32) -> ValidationResult {
    if count == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidDayCount,
            format!("{label} must be at least 1, got 0"),
        ));
    }
    Ok(())
}

/// Checks that `start <= end`.
pub fn validate_order<T: PartialOrd + Debug>(start: &T, end: &T) -> ValidationResult {
    if start <= end {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvertedPeriod,
            format!("period end {end:?} is before start {start:?}"),
        ))
    }
}
