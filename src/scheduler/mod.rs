//! Periodic re-evaluation of earnings.
//!
//! The [`AccrualScheduler`] recomputes an [`AccrualSnapshot`](crate::models::AccrualSnapshot)
//! on a fixed cadence and hands it to a [`TickObserver`] together with a flag
//! saying whether today's amount crossed into a new cent. Time comes from a
//! [`Clock`], so tests can drive it with a [`ManualClock`] and Tokio's paused
//! virtual time.

mod clock;
mod ticker;

pub use clock::{Clock, LocalClock, ManualClock};
pub use ticker::{AccrualScheduler, DEFAULT_TICK_PERIOD, TickObserver};
