//! Wall-clock sources for the scheduler.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Supplies the current local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the
/// scheduler owns another.
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use payticker::scheduler::{Clock, ManualClock};
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let clock = ManualClock::new(start);
/// let handle = clock.clone();
/// handle.advance(TimeDelta::minutes(5));
/// assert_eq!(clock.now(), start + TimeDelta::minutes(5));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    /// Creates a clock reading `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Sets the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Moves the clock forward (or back, for a negative delta).
    pub fn advance(&self, delta: TimeDelta) {
        let mut guard = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
