//! Salary conversion between monthly, daily and hourly bases.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{CompensationConfig, RateBasis};
use crate::models::Money;

use super::segments::total_duration_hours;

/// Average number of working days in a month.
///
/// A fixed approximation, not a calendar lookup: 21.75 = (365 - 104) / 12.
pub const WORKDAYS_PER_MONTH: Decimal = Decimal::from_parts(2175, 0, 0, false, 2);

/// The configured salary expressed in all three bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBreakdown {
    /// Pay per month.
    pub monthly: Money,
    /// Pay per workday.
    pub daily: Money,
    /// Pay per paid hour.
    pub hourly: Money,
}

/// Paid hours per workday.
///
/// A positive `manual_hours` override wins; otherwise the total of the valid
/// segments is used.
pub fn effective_hours(config: &CompensationConfig) -> Decimal {
    match config.manual_hours {
        Some(hours) if hours > Decimal::ZERO => hours,
        _ => total_duration_hours(&config.segments),
    }
}

/// Pay for one full workday under the configured rate basis.
///
/// - Monthly: `rate_amount / 21.75`
/// - Daily: `rate_amount`
/// - Hourly: `rate_amount * paid hours`, which is 0 with no paid hours
///
/// A product too large for [`Decimal`] yields 0 and logs a warning.
///
/// # Example
///
/// ```
/// use payticker::calculation::day_rate;
/// use payticker::config::{CompensationConfig, RateBasis};
/// use rust_decimal::Decimal;
///
/// let config = CompensationConfig {
///     rate_basis: RateBasis::Monthly,
///     rate_amount: Decimal::from(21_750),
///     ..CompensationConfig::default()
/// };
/// assert_eq!(day_rate(&config), Decimal::from(1000));
/// ```
pub fn day_rate(config: &CompensationConfig) -> Money {
    match config.rate_basis {
        RateBasis::Monthly => config.rate_amount / WORKDAYS_PER_MONTH,
        RateBasis::Daily => config.rate_amount,
        RateBasis::Hourly => {
            checked_product(config.rate_amount, effective_hours(config), "day_rate")
        }
    }
}

/// `a * b`, or zero if the product does not fit in a [`Decimal`].
pub(crate) fn checked_product(a: Decimal, b: Decimal, context: &'static str) -> Money {
    a.checked_mul(b).unwrap_or_else(|| {
        warn!(context, lhs = %a, rhs = %b, "Amount overflow, using zero");
        Decimal::ZERO
    })
}

/// Re-expresses the configured salary as monthly, daily and hourly figures.
///
/// Used for display, so zero paid hours are treated as one hour rather than
/// producing a division by zero.
pub fn rate_breakdown(config: &CompensationConfig) -> RateBreakdown {
    let hours = match effective_hours(config) {
        h if h.is_zero() => Decimal::ONE,
        h => h,
    };
    let amount = config.rate_amount;

    match config.rate_basis {
        RateBasis::Monthly => {
            let daily = amount / WORKDAYS_PER_MONTH;
            RateBreakdown {
                monthly: amount,
                daily,
                hourly: daily / hours,
            }
        }
        RateBasis::Daily => RateBreakdown {
            monthly: amount * WORKDAYS_PER_MONTH,
            daily: amount,
            hourly: amount / hours,
        },
        RateBasis::Hourly => {
            let daily = checked_product(amount, hours, "rate_breakdown");
            RateBreakdown {
                monthly: checked_product(daily, WORKDAYS_PER_MONTH, "rate_breakdown"),
                daily,
                hourly: amount,
            }
        }
    }
}
