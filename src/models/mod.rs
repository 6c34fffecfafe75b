//! Core data models for the earnings accrual engine.
//!
//! This module contains the domain values shared by configuration,
//! calculation and scheduling.

mod segment;
mod snapshot;
mod time_of_day;
mod work_days;

pub use segment::WorkSegment;
pub use snapshot::{AccrualSnapshot, Money};
pub use time_of_day::TimeOfDay;
pub use work_days::WorkDays;
