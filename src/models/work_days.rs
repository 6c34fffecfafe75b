//! Weekly workday recurrence.

use std::collections::BTreeSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The set of weekdays on which work happens, identified Monday=1 to Sunday=7.
///
/// Identifiers outside 1..=7 are stored but never match a calendar day.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use payticker::models::WorkDays;
///
/// let days = WorkDays::weekdays();
/// assert!(days.contains(Weekday::Fri));
/// assert!(!days.contains(Weekday::Sun));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkDays(BTreeSet<u8>);

impl WorkDays {
    /// Creates a set from weekday identifiers (Monday=1 ... Sunday=7).
    pub fn from_ids<I: IntoIterator<Item = u8>>(ids: I) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self::from_ids(1..=5)
    }

    /// An empty set: no day is a workday.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` if the given weekday is a workday.
    pub fn contains(&self, weekday: Weekday) -> bool {
        // number_from_monday is 1..=7, which fits in a u8
        self.0.contains(&(weekday.number_from_monday() as u8))
    }

    /// Returns `true` if no workdays are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the stored identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Default for WorkDays {
    fn default() -> Self {
        Self::weekdays()
    }
}
