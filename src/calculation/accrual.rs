//! Point-in-time earnings accrual.
//!
//! Every function here is a pure function of a configuration and a local
//! wall-clock instant. None of them fail: sparse or malformed input simply
//! earns nothing.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::CompensationConfig;
use crate::models::{AccrualSnapshot, Money, WorkSegment};

use super::calendar::{
    count_workdays_in_range, is_workday, month_end, month_start, week_end, week_start,
};
use super::day_rate::{checked_product, day_rate};
use super::segments::{segment_progress, valid_segments};

/// Splits `total` across segments in proportion to their durations.
///
/// The last segment takes whatever the others leave, so the shares always
/// add back up to `total` exactly. Each share is `total` times a fraction no
/// greater than one, so no intermediate exceeds `total`.
fn apportion(total: Money, segments: &[&WorkSegment], total_seconds: i64) -> Vec<Money> {
    let mut shares = Vec::with_capacity(segments.len());
    let mut allocated = Decimal::ZERO;
    let total_seconds = Decimal::from(total_seconds);

    for (index, segment) in segments.iter().enumerate() {
        let share = if index + 1 == segments.len() {
            total - allocated
        } else {
            total * (Decimal::from(segment.duration_seconds()) / total_seconds)
        };
        allocated += share;
        shares.push(share);
    }

    shares
}

/// Earned so far on the day of `now`.
///
/// The day rate is divided across the valid segments by duration, and each
/// segment accrues its share linearly while the clock is inside it. Before a
/// segment starts it contributes nothing; once it has ended it contributes
/// its whole share. Non-workdays earn nothing.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payticker::calculation::earned_today;
/// use payticker::config::{CompensationConfig, RateBasis};
/// use payticker::models::WorkSegment;
/// use rust_decimal::Decimal;
///
/// let config = CompensationConfig {
///     rate_basis: RateBasis::Hourly,
///     rate_amount: Decimal::from(50),
///     segments: vec![
///         WorkSegment::new("09:00".parse().unwrap(), "12:00".parse().unwrap()),
///         WorkSegment::new("13:00".parse().unwrap(), "18:00".parse().unwrap()),
///     ],
///     ..CompensationConfig::default()
/// };
///
/// // Tuesday 10:30, halfway through the morning block
/// let now = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// assert_eq!(earned_today(&config, now), Decimal::from(75));
/// ```
pub fn earned_today(config: &CompensationConfig, now: NaiveDateTime) -> Money {
    if !is_workday(&config.work_days, now.date()) {
        return Decimal::ZERO;
    }

    let segments: Vec<&WorkSegment> = valid_segments(&config.segments).collect();
    let total_seconds: i64 = segments.iter().map(|s| s.duration_seconds()).sum();
    if total_seconds == 0 {
        return Decimal::ZERO;
    }

    let shares = apportion(day_rate(config), &segments, total_seconds);
    let time = now.time();

    segments
        .iter()
        .zip(shares)
        .map(|(segment, share)| share * segment_progress(segment, time))
        .sum()
}

/// Earned over `range_start..=range_end`, counting whole workdays only.
///
/// Days after `now`'s date are not counted. The current day, if it is a
/// workday, counts as a full day even while it is still in progress: range
/// totals are deliberately coarser than [`earned_today`]. A total too large
/// for [`Decimal`] yields 0 and logs a warning.
pub fn earned_in_range(
    config: &CompensationConfig,
    range_start: NaiveDate,
    range_end: NaiveDate,
    now: NaiveDateTime,
) -> Money {
    let end = range_end.min(now.date());
    let days = count_workdays_in_range(&config.work_days, range_start, end);
    checked_product(day_rate(config), Decimal::from(days), "earned_in_range")
}

/// Earned in the Monday-to-Sunday week containing `now`.
pub fn earned_this_week(config: &CompensationConfig, now: NaiveDateTime) -> Money {
    let today = now.date();
    earned_in_range(config, week_start(today), week_end(today), now)
}

/// Earned in the calendar month containing `now`.
pub fn earned_this_month(config: &CompensationConfig, now: NaiveDateTime) -> Money {
    let today = now.date();
    earned_in_range(config, month_start(today), month_end(today), now)
}

/// Today, week and month figures at `now`.
pub fn snapshot(config: &CompensationConfig, now: NaiveDateTime) -> AccrualSnapshot {
    AccrualSnapshot {
        taken_at: now,
        today: earned_today(config, now),
        week: earned_this_week(config, now),
        month: earned_this_month(config, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateBasis;
    use crate::models::WorkDays;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn segment(start: &str, end: &str) -> WorkSegment {
        WorkSegment::new(start.parse().unwrap(), end.parse().unwrap())
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// Hourly 50, 09:00-12:00 and 13:00-18:00, Monday to Friday.
    fn hourly_split_day() -> CompensationConfig {
        CompensationConfig {
            rate_basis: RateBasis::Hourly,
            rate_amount: dec("50"),
            segments: vec![segment("09:00", "12:00"), segment("13:00", "18:00")],
            work_days: WorkDays::weekdays(),
            manual_hours: None,
        }
    }

    // 2026-01-13 is a Tuesday, 2026-01-17 a Saturday.
    const TUESDAY: &str = "2026-01-13";
    const SATURDAY: &str = "2026-01-17";

    #[test]
    fn test_mid_morning_scenario() {
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_today(&hourly_split_day(), now), dec("75.00"));
    }

    #[test]
    fn test_before_first_segment_is_zero() {
        let now = make_datetime(TUESDAY, "08:59:59");
        assert_eq!(earned_today(&hourly_split_day(), now), Decimal::ZERO);
    }

    #[test]
    fn test_lunch_break_holds_morning_share() {
        let config = hourly_split_day();
        assert_eq!(
            earned_today(&config, make_datetime(TUESDAY, "12:00:00")),
            dec("150")
        );
        assert_eq!(
            earned_today(&config, make_datetime(TUESDAY, "12:45:00")),
            dec("150")
        );
    }

    #[test]
    fn test_mid_afternoon() {
        // 150 for the morning plus half of the 250 afternoon share
        let now = make_datetime(TUESDAY, "15:30:00");
        assert_eq!(earned_today(&hourly_split_day(), now), dec("275"));
    }

    #[test]
    fn test_full_day_closure_at_last_segment_end() {
        let config = hourly_split_day();
        let now = make_datetime(TUESDAY, "18:00:00");
        assert_eq!(earned_today(&config, now), day_rate(&config));
    }

    #[test]
    fn test_after_hours_holds_day_rate() {
        let config = hourly_split_day();
        let now = make_datetime(TUESDAY, "23:59:59");
        assert_eq!(earned_today(&config, now), dec("400"));
    }

    #[test]
    fn test_closure_with_uneven_segments() {
        // Thirds that do not divide evenly in decimal
        let config = CompensationConfig {
            rate_basis: RateBasis::Daily,
            rate_amount: dec("100"),
            segments: vec![
                segment("08:00", "09:00"),
                segment("10:00", "11:00"),
                segment("12:00", "13:00"),
            ],
            ..CompensationConfig::default()
        };
        let now = make_datetime(TUESDAY, "13:00:00");
        assert_eq!(earned_today(&config, now), dec("100"));
    }

    #[test]
    fn test_non_workday_is_zero() {
        let now = make_datetime(SATURDAY, "15:00:00");
        assert_eq!(earned_today(&hourly_split_day(), now), Decimal::ZERO);
    }

    #[test]
    fn test_no_segments_is_zero() {
        let config = CompensationConfig {
            rate_basis: RateBasis::Daily,
            rate_amount: dec("300"),
            segments: vec![],
            ..CompensationConfig::default()
        };
        let now = make_datetime(TUESDAY, "15:00:00");
        assert_eq!(earned_today(&config, now), Decimal::ZERO);
    }

    #[test]
    fn test_all_invalid_segments_is_zero() {
        let config = CompensationConfig {
            segments: vec![segment("12:00", "09:00"), segment("13:00", "13:00")],
            ..hourly_split_day()
        };
        let now = make_datetime(TUESDAY, "23:00:00");
        assert_eq!(earned_today(&config, now), Decimal::ZERO);
    }

    #[test]
    fn test_invalid_segment_is_skipped() {
        let mut config = hourly_split_day();
        config.segments.insert(1, segment("19:00", "18:30"));
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_today(&config, now), dec("75"));
    }

    #[test]
    fn test_unordered_segments() {
        let mut config = hourly_split_day();
        config.segments.reverse();
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_today(&config, now), dec("75"));
    }

    #[test]
    fn test_monthly_single_window() {
        let config = CompensationConfig {
            rate_basis: RateBasis::Monthly,
            rate_amount: dec("21750"),
            segments: vec![segment("09:00", "17:00")],
            ..CompensationConfig::default()
        };
        let now = make_datetime(TUESDAY, "11:00:00");
        assert_eq!(earned_today(&config, now), dec("250"));
    }

    #[test]
    fn test_manual_hours_change_rate_not_shape() {
        let mut config = hourly_split_day();
        config.manual_hours = Some(dec("10"));
        // Day rate 500; morning share 3/8 of it = 187.5; half elapsed
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_today(&config, now), dec("93.75"));
    }

    #[test]
    fn test_week_counts_today_as_full_day() {
        // Tuesday morning: Monday and Tuesday count in full
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_this_week(&hourly_split_day(), now), dec("800"));
    }

    #[test]
    fn test_week_on_weekend_counts_five_days() {
        let now = make_datetime(SATURDAY, "10:00:00");
        assert_eq!(earned_this_week(&hourly_split_day(), now), dec("2000"));
    }

    #[test]
    fn test_week_on_sunday_uses_preceding_monday() {
        let now = make_datetime("2026-01-18", "10:00:00");
        assert_eq!(earned_this_week(&hourly_split_day(), now), dec("2000"));
    }

    #[test]
    fn test_month_to_date() {
        // January 2026 starts on Thursday: 1, 2, 5..9, 12, 13 = 9 workdays
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_this_month(&hourly_split_day(), now), dec("3600"));
    }

    #[test]
    fn test_range_is_capped_at_now() {
        let now = make_datetime(TUESDAY, "10:30:00");
        let total = earned_in_range(
            &hourly_split_day(),
            make_date("2026-01-12"),
            make_date("2026-01-31"),
            now,
        );
        assert_eq!(total, dec("800"));
    }

    #[test]
    fn test_range_ending_before_now() {
        let now = make_datetime("2026-02-10", "10:30:00");
        let total = earned_in_range(
            &hourly_split_day(),
            make_date("2026-01-12"),
            make_date("2026-01-16"),
            now,
        );
        assert_eq!(total, dec("2000"));
    }

    #[test]
    fn test_range_starting_after_now_is_zero() {
        let now = make_datetime(TUESDAY, "10:30:00");
        let total = earned_in_range(
            &hourly_split_day(),
            make_date("2026-01-20"),
            make_date("2026-01-23"),
            now,
        );
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_range_with_daily_rate_and_no_segments() {
        let config = CompensationConfig {
            rate_basis: RateBasis::Daily,
            rate_amount: dec("300"),
            segments: vec![],
            ..CompensationConfig::default()
        };
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_this_week(&config, now), dec("600"));
    }

    #[test]
    fn test_snapshot_combines_all_periods() {
        let now = make_datetime(TUESDAY, "10:30:00");
        let s = snapshot(&hourly_split_day(), now);
        assert_eq!(s.taken_at, now);
        assert_eq!(s.today, dec("75"));
        assert_eq!(s.week, dec("800"));
        assert_eq!(s.month, dec("3600"));
    }

    #[test]
    fn test_apportion_sums_exactly() {
        let a = segment("08:00", "09:00");
        let b = segment("09:00", "11:00");
        let shares = apportion(dec("10"), &[&a, &b], 3 * 3600);
        assert_eq!(shares.iter().copied().sum::<Decimal>(), dec("10"));
        assert_eq!(shares[1], dec("10") - shares[0]);
    }

    #[test]
    fn test_huge_daily_rate_does_not_panic() {
        let config = CompensationConfig {
            rate_basis: RateBasis::Daily,
            rate_amount: dec("10000000000000000000000000"),
            ..hourly_split_day()
        };
        let now = make_datetime(TUESDAY, "10:30:00");
        let s = snapshot(&config, now);
        assert_eq!(s.today, dec("1875000000000000000000000"));
        assert_eq!(s.week, dec("20000000000000000000000000"));
        assert_eq!(s.month, dec("90000000000000000000000000"));
    }

    #[test]
    fn test_range_total_overflow_falls_back_to_zero() {
        let config = CompensationConfig {
            rate_basis: RateBasis::Daily,
            rate_amount: dec("70000000000000000000000000000"),
            ..hourly_split_day()
        };
        let now = make_datetime(TUESDAY, "10:30:00");
        assert_eq!(earned_this_week(&config, now), Decimal::ZERO);
        assert_eq!(earned_today(&config, now), dec("13125000000000000000000000000"));
    }

    fn tuesday_at(seconds: u32) -> NaiveDateTime {
        make_date(TUESDAY).and_hms_opt(0, 0, 0).unwrap() + chrono::Duration::seconds(i64::from(seconds))
    }

    fn arbitrary_segments(bounds: &[(u8, u8)]) -> Vec<WorkSegment> {
        bounds
            .iter()
            .map(|(s, e)| {
                WorkSegment::new(
                    crate::models::TimeOfDay::new(*s, 0).unwrap(),
                    crate::models::TimeOfDay::new(*e, 0).unwrap(),
                )
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_earned_today_is_monotonic(a in 0u32..86_400, b in 0u32..86_400) {
            let config = hourly_split_day();
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                earned_today(&config, tuesday_at(early)) <= earned_today(&config, tuesday_at(late))
            );
        }

        #[test]
        fn prop_monotonic_for_arbitrary_segments(
            bounds in proptest::collection::vec((0u8..24, 0u8..24), 1..5),
            rate in 1u32..100_000,
            a in 0u32..86_400,
            b in 0u32..86_400,
        ) {
            let config = CompensationConfig {
                rate_basis: RateBasis::Daily,
                rate_amount: Decimal::from(rate),
                segments: arbitrary_segments(&bounds),
                ..CompensationConfig::default()
            };
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                earned_today(&config, tuesday_at(early)) <= earned_today(&config, tuesday_at(late))
            );
        }

        #[test]
        fn prop_earned_today_within_day_rate(seconds in 0u32..86_400, rate in 0u32..1_000_000) {
            let config = CompensationConfig {
                rate_basis: RateBasis::Monthly,
                rate_amount: Decimal::from(rate),
                ..hourly_split_day()
            };
            let earned = earned_today(&config, tuesday_at(seconds));
            prop_assert!(earned >= Decimal::ZERO);
            prop_assert!(earned <= day_rate(&config));
        }

        #[test]
        fn prop_closure_for_arbitrary_segments(
            bounds in proptest::collection::vec((0u8..24, 0u8..24), 1..5),
            rate in 1u32..100_000,
        ) {
            let segments = arbitrary_segments(&bounds);
            let config = CompensationConfig {
                rate_basis: RateBasis::Daily,
                rate_amount: Decimal::from(rate),
                segments,
                ..CompensationConfig::default()
            };
            let end_of_day = tuesday_at(86_399);
            let expected = if config.valid_segment_count() == 0 {
                Decimal::ZERO
            } else {
                day_rate(&config)
            };
            prop_assert_eq!(earned_today(&config, end_of_day), expected);
        }

        #[test]
        fn prop_weekend_earns_nothing(seconds in 0u32..86_400) {
            let now = make_date(SATURDAY).and_hms_opt(0, 0, 0).unwrap()
                + chrono::Duration::seconds(i64::from(seconds));
            prop_assert_eq!(earned_today(&hourly_split_day(), now), Decimal::ZERO);
        }
    }
}
