//! Point-in-time earnings snapshot.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the configured (single) currency.
pub type Money = Decimal;

/// Earned amounts for today, this week and this month at one instant.
///
/// Snapshots are produced on demand or on every scheduler tick and are
/// superseded by the next one; nothing retains them.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payticker::models::AccrualSnapshot;
/// use rust_decimal::Decimal;
///
/// let snapshot = AccrualSnapshot {
///     taken_at: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap().and_hms_opt(10, 30, 0).unwrap(),
///     today: Decimal::new(75_129, 3), // 75.129
///     week: Decimal::from(400),
///     month: Decimal::from(4000),
/// };
/// assert_eq!(snapshot.today_cents(), Decimal::from(7512));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualSnapshot {
    /// The local wall-clock instant the amounts were computed for.
    pub taken_at: NaiveDateTime,
    /// Earned so far today, interpolated within work segments.
    pub today: Money,
    /// Earned this week, counting whole workdays.
    pub week: Money,
    /// Earned this month, counting whole workdays.
    pub month: Money,
}

impl AccrualSnapshot {
    /// Today's amount truncated to whole hundredths of the currency unit.
    ///
    /// Successive ticks are compared at this resolution so sub-cent jitter
    /// does not count as a change. Amounts beyond the range of [`Decimal`]
    /// once scaled saturate at [`Decimal::MAX`].
    pub fn today_cents(&self) -> Decimal {
        self.today
            .checked_mul(Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::MAX)
            .floor()
    }
}
