//! Workday calendar enumeration.
//!
//! Weekdays are identified Monday=1 through Sunday=7, and weeks start on
//! Monday.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::WorkDays;

/// Returns `true` if `date` falls on one of the configured workdays.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payticker::calculation::is_workday;
/// use payticker::models::WorkDays;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert!(!is_workday(&WorkDays::weekdays(), saturday));
/// ```
pub fn is_workday(work_days: &WorkDays, date: NaiveDate) -> bool {
    work_days.contains(date.weekday())
}

/// Counts workdays from `start` to `end`, both inclusive.
///
/// The scan steps one calendar day at a time, so ranges crossing month and
/// year boundaries need no special handling. A reversed range counts zero.
pub fn count_workdays_in_range(work_days: &WorkDays, start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end || work_days.is_empty() {
        return 0;
    }

    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_workday(work_days, *day))
        .count();

    u32::try_from(count).unwrap_or(u32::MAX)
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// The Sunday on or after `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(6 - date.weekday().num_days_from_monday());
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

/// The first day of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The last day of `date`'s month.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    let next_month = first
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(first);
    next_month.pred_opt().filter(|d| *d >= first).unwrap_or(date)
}
