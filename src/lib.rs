//! Stateless calendar utilities.
//!
//! A flat set of pure date functions: timestamp conversion, formatting,
//! month and period lengths, weekend counting, week numbering, quarters,
//! leap years, weekday searches and work/off-day rotations. No function
//! holds state between calls.
//!
//! # Modules
//!
//! - **`models`**: Value types — `Instant`, `DatePeriod`, `WorkPattern` and
//!   day-overflow normalization
//! - **`parse`**: Accepted date-string layouts
//! - **`format`**: Timestamps, `hh:mm:ss`, `M/D/YYYY, h:mm:ss AM`, day names
//! - **`arithmetic`**: Month/period lengths, weekends, week numbers, quarters,
//!   leap years
//! - **`search`**: Next Friday, next Friday the 13th
//! - **`schedule`**: Work/off-day rotations over a period
//! - **`validation`**: Argument checks (month range, day counts, ordering)
//!
//! # Time Zones
//!
//! String inputs without an explicit offset are read as UTC. Functions that
//! work on calendar fields accept any `chrono` value implementing `Datelike`
//! (or a zoned `DateTime`), so host-local behavior is opt-in:
//!
//! ```
//! use chrono::Local;
//! use u_calendar::{quarter, week_number};
//!
//! let now = Local::now();
//! assert!((1..=4).contains(&quarter(&now)));
//! assert!((1..=54).contains(&week_number(&now)));
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (`debug` spans around the day-by-day scans,
//! `trace` per scanned result). No subscriber is installed by the crate.

pub mod arithmetic;
pub mod error;
pub mod format;
pub mod models;
pub mod parse;
pub mod schedule;
pub mod search;
pub mod validation;

pub use arithmetic::{
    days_in_month, days_in_period, is_date_in_period, is_leap_year, is_leap_year_number, quarter,
    week_number, weekends_in_month,
};
pub use error::{CalendarError, Result};
pub use format::{date_to_timestamp, day_name, format_date, format_time, weekday_name};
pub use models::{DatePeriod, Instant, WorkPattern};
pub use schedule::{work_schedule, work_schedule_dates, WorkScheduleIter};
pub use search::{next_friday, next_friday_the_13th};
