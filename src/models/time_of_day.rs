//! Wall-clock time of day at minute resolution.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A time of day with hour and minute components.
///
/// Times are written and parsed as `HH:MM`, matching what a browser
/// `<input type="time">` produces.
///
/// # Example
///
/// ```
/// use payticker::models::TimeOfDay;
/// use rust_decimal::Decimal;
///
/// let t: TimeOfDay = "13:30".parse().unwrap();
/// assert_eq!(t.hour(), 13);
/// assert_eq!(t.minute(), 30);
/// assert_eq!(t.fractional_hours(), Decimal::new(135, 1)); // 13.5
/// assert_eq!(t.to_string(), "13:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, returning `None` if the hour is above 23 or
    /// the minute above 59.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    /// The hour component, 0 to 23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute component, 0 to 59.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60
    }

    /// The time as fractional hours, `hour + minute / 60`.
    pub fn fractional_hours(&self) -> Decimal {
        Decimal::from(self.hour) + Decimal::from(self.minute) / Decimal::from(60)
    }

    /// Converts to a chrono [`NaiveTime`].
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidTimeOfDay {
            value: s.to_string(),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
