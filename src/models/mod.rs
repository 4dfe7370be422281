//! Calendar domain models.
//!
//! Provides the small set of value types the calendar operations exchange.
//! None of them hold state beyond a single call.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Instant`] | Absolute point in time (epoch milliseconds) |
//! | [`DatePeriod`] | Inclusive `{start, end}` pair of date strings |
//! | [`WorkPattern`] | Repeating cycle of work days and days off |
//!
//! [`normalize_ymd`] supplies the day/month overflow rules that month-length
//! and Friday-the-13th calculations depend on.

mod civil;
mod instant;
mod pattern;
mod period;

pub use civil::normalize_ymd;
pub use instant::{Instant, MS_PER_DAY};
pub use pattern::WorkPattern;
pub use period::DatePeriod;
