//! Work segment model.
//!
//! A [`WorkSegment`] is one contiguous block of paid time within a day, such
//! as a morning or afternoon session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// A contiguous time-of-day interval during which work accrues pay.
///
/// A segment is only valid when `end` is strictly after `start`. Invalid
/// segments are kept as data but contribute nothing to any calculation.
///
/// # Example
///
/// ```
/// use payticker::models::{TimeOfDay, WorkSegment};
/// use rust_decimal::Decimal;
///
/// let morning = WorkSegment::new(
///     TimeOfDay::new(9, 0).unwrap(),
///     TimeOfDay::new(12, 30).unwrap(),
/// );
/// assert!(morning.is_valid());
/// assert_eq!(morning.duration_hours(), Decimal::new(35, 1)); // 3.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSegment {
    /// When the segment starts.
    pub start: TimeOfDay,
    /// When the segment ends.
    pub end: TimeOfDay,
}

impl WorkSegment {
    /// Creates a new segment.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the segment ends strictly after it starts.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Length of the segment in seconds, or 0 for an invalid segment.
    pub fn duration_seconds(&self) -> i64 {
        if self.is_valid() {
            self.end.seconds_from_midnight() - self.start.seconds_from_midnight()
        } else {
            0
        }
    }

    /// Length of the segment in fractional hours, or 0 for an invalid segment.
    pub fn duration_hours(&self) -> Decimal {
        if self.is_valid() {
            self.end.fractional_hours() - self.start.fractional_hours()
        } else {
            Decimal::ZERO
        }
    }
}
