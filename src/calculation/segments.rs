//! Work segment duration and progress queries.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::WorkSegment;

/// Iterates only the segments that end strictly after they start.
pub fn valid_segments(segments: &[WorkSegment]) -> impl Iterator<Item = &WorkSegment> {
    segments.iter().filter(|segment| segment.is_valid())
}

/// Total paid time across all valid segments, in fractional hours.
///
/// Invalid segments contribute nothing; an empty list yields zero.
///
/// # Example
///
/// ```
/// use payticker::calculation::total_duration_hours;
/// use payticker::models::WorkSegment;
/// use rust_decimal::Decimal;
///
/// let segments = vec![
///     WorkSegment::new("09:00".parse().unwrap(), "12:00".parse().unwrap()),
///     WorkSegment::new("13:00".parse().unwrap(), "18:00".parse().unwrap()),
///     WorkSegment::new("20:00".parse().unwrap(), "19:00".parse().unwrap()), // ignored
/// ];
/// assert_eq!(total_duration_hours(&segments), Decimal::from(8));
/// ```
pub fn total_duration_hours(segments: &[WorkSegment]) -> Decimal {
    let seconds: i64 = valid_segments(segments)
        .map(WorkSegment::duration_seconds)
        .sum();
    Decimal::from(seconds) / Decimal::from(3600)
}

/// How far through `segment` the wall clock is at `now`, from 0 to 1.
///
/// Before the start the fraction is 0, at or after the end it is 1, and in
/// between it grows linearly at millisecond resolution. An invalid segment
/// always reports 0.
pub fn segment_progress(segment: &WorkSegment, now: NaiveTime) -> Decimal {
    if !segment.is_valid() {
        return Decimal::ZERO;
    }

    let start = segment.start.to_naive_time();
    let end = segment.end.to_naive_time();

    if now < start {
        Decimal::ZERO
    } else if now >= end {
        Decimal::ONE
    } else {
        let elapsed_ms = (now - start).num_milliseconds();
        let duration_ms = segment.duration_seconds() * 1000;
        Decimal::from(elapsed_ms) / Decimal::from(duration_ms)
    }
}
