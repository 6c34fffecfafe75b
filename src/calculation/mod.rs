//! Calculation logic for the earnings accrual engine.
//!
//! This module contains the pure calculations behind every displayed figure:
//! segment durations and progress, salary conversion to a day rate, workday
//! calendar enumeration, and the today/week/month accrual that combines them.

mod accrual;
mod calendar;
mod day_rate;
mod segments;

pub use accrual::{
    earned_in_range, earned_this_month, earned_this_week, earned_today, snapshot,
};
pub use calendar::{
    count_workdays_in_range, is_workday, month_end, month_start, week_end, week_start,
};
pub use day_rate::{RateBreakdown, WORKDAYS_PER_MONTH, day_rate, effective_hours, rate_breakdown};
pub use segments::{segment_progress, total_duration_hours, valid_segments};
