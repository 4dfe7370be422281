//! Work/off-day cycles.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_day_count, ValidationResult};

/// A repeating cycle of `work_days` on followed by `off_days` off.
///
/// # Examples
///
/// ```
/// use u_calendar::models::WorkPattern;
///
/// // Classic "2 on, 2 off" rotation
/// let p = WorkPattern::new(2, 2);
/// assert_eq!(p.cycle_len(), 4);
/// assert!(p.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkPattern {
    /// Consecutive working days per cycle.
    pub work_days: u32,
    /// Consecutive days off per cycle.
    pub off_days: u32,
}

impl WorkPattern {
    /// Creates a new pattern. Call [`validate`](Self::validate) before use.
    pub fn new(work_days: u32, off_days: u32) -> Self {
        Self {
            work_days,
            off_days,
        }
    }

    /// Total cycle length in days.
    #[inline]
    pub fn cycle_len(&self) -> u64 {
        u64::from(self.work_days) + u64::from(self.off_days)
    }

    /// Both counts must be at least one day.
    pub fn validate(&self) -> ValidationResult {
        validate_day_count("work days", self.work_days)?;
        validate_day_count("off days", self.off_days)
    }
}
