//! Error types for the u-calendar crate.

use crate::validation::ValidationError;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date string matches none of the accepted formats.
    #[error("invalid date: {input:?}")]
    InvalidDate {
        /// The rejected input, verbatim.
        input: String,
    },

    /// Returned when a numeric argument or period is rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Returned when date arithmetic leaves the representable calendar range.
    #[error("{what} is outside the supported date range")]
    OutOfRange {
        /// Which value overflowed.
        what: &'static str,
    },
}

impl CalendarError {
    pub(crate) fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    pub(crate) fn out_of_range(what: &'static str) -> Self {
        Self::OutOfRange { what }
    }
}
