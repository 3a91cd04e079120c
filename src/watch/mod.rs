//! Watch schedules for two operators.
//!
//! A schedule partitions `[start, end)` into contiguous periods. The first period starts at
//! `start`, the last one ends at `end`, and the durations always add up to `end - start`
//! exactly, since all arithmetic is done on whole nanoseconds. Where a split leaves an odd
//! nanosecond it goes to the first half.

use std::fmt;

use serde::Serialize;
use time::{Duration, PrimitiveDateTime};

use crate::error::Error;

pub mod format;

pub use format::{format_duration, parse_instant, time_underway};

pub const DESCRIPTION: &str = "Halfway: the interval is split at its midpoint.\n\
    Custom: an even number of max-length watches with the remainder split evenly between both \
    ends, e.g. 18 hrs underway with max 6 hour watch is split 3/6/6/3.";

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Shortest watch the custom policy accepts.
const MIN_WATCH_NANOS: i64 = 60_000_000_000;

/// Upper bound on the number of full watches in one schedule.
const MAX_FULL_WATCHES: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    One,
    Two,
}

impl Operator {
    /// Operator on duty for the `k`th period of a schedule, counting from one.
    pub fn for_period(k: usize) -> Self {
        if k % 2 == 1 {
            Operator::One
        } else {
            Operator::Two
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::One => f.write_str("Operator 1"),
            Operator::Two => f.write_str("Operator 2"),
        }
    }
}

/// Display names for the two operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorNames {
    pub first: String,
    pub second: String,
}

impl OperatorNames {
    pub fn name(&self, operator: Operator) -> &str {
        match operator {
            Operator::One => &self.first,
            Operator::Two => &self.second,
        }
    }
}

impl Default for OperatorNames {
    fn default() -> Self {
        Self {
            first: Operator::One.to_string(),
            second: Operator::Two.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WatchPolicy {
    /// Split the interval at its midpoint.
    Halfway,
    /// Watches of at most `max_hours`, with the remainder split between both ends.
    CustomMaxWatch { max_hours: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchPeriod {
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
    pub operator: Operator,
    pub duration_text: String,
}

impl WatchPeriod {
    fn new(start: PrimitiveDateTime, end: PrimitiveDateTime, operator: Operator) -> Self {
        Self {
            start,
            end,
            operator,
            duration_text: format_duration(end - start),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
    pub periods: Vec<WatchPeriod>,
}

impl Schedule {
    pub fn total(&self) -> Duration {
        self.end - self.start
    }

    /// Total time underway, e.g. `18h` or `7h 30m`.
    pub fn total_text(&self) -> String {
        format_duration(self.total())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRequest {
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
    pub policy: WatchPolicy,
}

impl ScheduleRequest {
    pub fn generate(&self) -> Result<Schedule, Error> {
        generate_schedule(self.start, self.end, self.policy)
    }
}

/// Split `[start, end)` into alternating watches according to `policy`.
///
/// Periods are never empty, so an interval of a single nanosecond yields one period even
/// under [`WatchPolicy::Halfway`]. Minute-precision instants never hit this.
#[tracing::instrument(skip(start, end))]
pub fn generate_schedule(
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    policy: WatchPolicy,
) -> Result<Schedule, Error> {
    if end <= start {
        return Err(Error::InvalidInterval);
    }
    let total = whole_nanos(end - start)?;

    let mut builder = Builder::new(start);
    match policy {
        WatchPolicy::Halfway => {
            builder.push(total - total / 2);
        }
        WatchPolicy::CustomMaxWatch { max_hours } => {
            let max = max_watch_nanos(max_hours)?;

            // Keep the number of full watches even, so both ends get an equal remainder.
            let mut full = total / max;
            if full > MAX_FULL_WATCHES {
                return Err(Error::InvalidConfig("max watch hours too short for the interval"));
            }
            if full % 2 == 1 {
                full -= 1;
            }
            let remainder = total - full * max;
            tracing::debug!(full, remainder_ns = remainder, "custom watch split");

            let leading = remainder - remainder / 2;
            if leading > 0 {
                builder.push(leading);
            }
            for _ in 0..full {
                builder.push(max);
            }
        }
    }
    let periods = builder.finish(end);
    tracing::debug!(periods = periods.len(), "generated watch schedule");

    Ok(Schedule {
        start,
        end,
        periods,
    })
}

fn whole_nanos(duration: Duration) -> Result<i64, Error> {
    i64::try_from(duration.whole_nanoseconds())
        .map_err(|_| Error::DomainError("interval too long to schedule"))
}

fn max_watch_nanos(max_hours: f64) -> Result<i64, Error> {
    if !max_hours.is_finite() || max_hours <= 0.0 {
        return Err(Error::InvalidConfig("max watch hours must be positive"));
    }
    let nanos = (max_hours * NANOS_PER_HOUR).round();
    if nanos >= i64::MAX as f64 {
        return Err(Error::InvalidConfig("max watch hours out of range"));
    }
    if nanos < MIN_WATCH_NANOS as f64 {
        return Err(Error::InvalidConfig("max watch must be at least one minute"));
    }
    Ok(nanos as i64)
}

struct Builder {
    cursor: PrimitiveDateTime,
    periods: Vec<WatchPeriod>,
}

impl Builder {
    fn new(start: PrimitiveDateTime) -> Self {
        Self {
            cursor: start,
            periods: Vec::new(),
        }
    }

    fn push(&mut self, nanos: i64) {
        let end = self.cursor + Duration::nanoseconds(nanos);
        self.push_until(end);
    }

    fn push_until(&mut self, end: PrimitiveDateTime) {
        let operator = Operator::for_period(self.periods.len() + 1);
        self.periods.push(WatchPeriod::new(self.cursor, end, operator));
        self.cursor = end;
    }

    /// Close the schedule with a final period ending exactly at `end`, unless the pushed periods
    /// already reach it.
    fn finish(mut self, end: PrimitiveDateTime) -> Vec<WatchPeriod> {
        if self.cursor < end {
            self.push_until(end);
        }
        self.periods
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn hours(periods: &[WatchPeriod]) -> Vec<(f64, Operator)> {
        periods
            .iter()
            .map(|p| (p.duration().as_seconds_f64() / 3600.0, p.operator))
            .collect()
    }

    fn assert_covers(schedule: &Schedule) {
        let periods = &schedule.periods;
        assert_eq!(periods.first().unwrap().start, schedule.start);
        assert_eq!(periods.last().unwrap().end, schedule.end);
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let sum = periods
            .iter()
            .fold(Duration::ZERO, |acc, p| acc + p.duration());
        assert_eq!(sum, schedule.end - schedule.start);
        assert!(periods.iter().all(|p| p.duration() > Duration::ZERO));
    }

    #[test]
    #[tracing_test::traced_test]
    fn halfway_ten_hours() {
        let schedule = generate_schedule(
            datetime!(2024-01-01 00:00),
            datetime!(2024-01-01 10:00),
            WatchPolicy::Halfway,
        )
        .unwrap();

        assert_eq!(
            hours(&schedule.periods),
            vec![(5.0, Operator::One), (5.0, Operator::Two)]
        );
        assert_eq!(schedule.periods[0].end, datetime!(2024-01-01 05:00));
        assert_eq!(schedule.periods[0].duration_text, "5h");
        assert_covers(&schedule);
        assert!(logs_contain("generated watch schedule"));
    }

    #[test]
    fn custom_eighteen_hours_by_six() {
        let schedule = generate_schedule(
            datetime!(2024-01-01 06:00),
            datetime!(2024-01-02 00:00),
            WatchPolicy::CustomMaxWatch { max_hours: 6.0 },
        )
        .unwrap();

        assert_eq!(
            hours(&schedule.periods),
            vec![
                (3.0, Operator::One),
                (6.0, Operator::Two),
                (6.0, Operator::One),
                (3.0, Operator::Two),
            ]
        );
        assert_eq!(schedule.total_text(), "18h");
        assert_eq!(schedule.periods.len() % 2, 0);
        assert_covers(&schedule);
    }

    #[test]
    fn custom_exact_multiple_has_no_edges() {
        let schedule = generate_schedule(
            datetime!(2024-01-01 00:00),
            datetime!(2024-01-01 12:00),
            WatchPolicy::CustomMaxWatch { max_hours: 6.0 },
        )
        .unwrap();

        assert_eq!(
            hours(&schedule.periods),
            vec![(6.0, Operator::One), (6.0, Operator::Two)]
        );
        assert_covers(&schedule);
    }

    #[test]
    fn custom_shorter_than_one_watch_splits_in_two() {
        let schedule = generate_schedule(
            datetime!(2024-01-01 00:00),
            datetime!(2024-01-01 04:00),
            WatchPolicy::CustomMaxWatch { max_hours: 6.0 },
        )
        .unwrap();

        assert_eq!(
            hours(&schedule.periods),
            vec![(2.0, Operator::One), (2.0, Operator::Two)]
        );
        assert_covers(&schedule);
    }

    #[test]
    fn custom_single_full_watch_is_dropped_for_parity() {
        // 10h / 6h gives one full watch, which is odd, so the whole interval becomes remainder.
        let schedule = generate_schedule(
            datetime!(2024-01-01 00:00),
            datetime!(2024-01-01 10:00),
            WatchPolicy::CustomMaxWatch { max_hours: 6.0 },
        )
        .unwrap();

        assert_eq!(
            hours(&schedule.periods),
            vec![(5.0, Operator::One), (5.0, Operator::Two)]
        );
        assert_covers(&schedule);
    }

    #[test]
    fn custom_fractional_hours() {
        let schedule = generate_schedule(
            datetime!(2024-03-10 08:15),
            datetime!(2024-03-10 21:15),
            WatchPolicy::CustomMaxWatch { max_hours: 4.0 },
        )
        .unwrap();

        assert_eq!(
            hours(&schedule.periods),
            vec![
                (2.5, Operator::One),
                (4.0, Operator::Two),
                (4.0, Operator::One),
                (2.5, Operator::Two),
            ]
        );
        assert_eq!(schedule.periods[0].duration_text, "2h 30m");
        assert_covers(&schedule);
    }

    #[test]
    fn coverage_holds_for_awkward_intervals() {
        let start = datetime!(2024-05-01 00:00);
        for minutes in [1, 7, 59, 61, 359, 1001, 1439, 2881] {
            let end = start + Duration::minutes(minutes) + Duration::seconds(13);
            for policy in [
                WatchPolicy::Halfway,
                WatchPolicy::CustomMaxWatch { max_hours: 6.0 },
                WatchPolicy::CustomMaxWatch { max_hours: 0.7 },
                WatchPolicy::CustomMaxWatch { max_hours: 3.3 },
            ] {
                let schedule = generate_schedule(start, end, policy).unwrap();
                assert_covers(&schedule);
                assert_eq!(schedule.periods[0].operator, Operator::One);
            }
        }
    }

    #[test]
    fn end_must_follow_start() {
        let at = datetime!(2024-01-01 00:00);
        assert_eq!(
            generate_schedule(at, at, WatchPolicy::Halfway),
            Err(Error::InvalidInterval)
        );
        assert_eq!(
            generate_schedule(at, at - Duration::hours(1), WatchPolicy::Halfway),
            Err(Error::InvalidInterval)
        );
    }

    #[test]
    fn max_hours_below_a_minute_is_rejected() {
        let start = datetime!(2024-01-01 00:00);
        let end = datetime!(2024-01-01 18:00);
        for max_hours in [1e-9, 0.01] {
            assert_eq!(
                generate_schedule(start, end, WatchPolicy::CustomMaxWatch { max_hours }),
                Err(Error::InvalidConfig("max watch must be at least one minute"))
            );
        }
    }

    #[test]
    fn too_many_full_watches_is_rejected() {
        let start = datetime!(2024-01-01 00:00);
        let end = start + Duration::days(30);
        assert_eq!(
            generate_schedule(start, end, WatchPolicy::CustomMaxWatch { max_hours: 1.0 / 60.0 }),
            Err(Error::InvalidConfig("max watch hours too short for the interval"))
        );
    }

    #[test]
    fn halfway_single_nanosecond_is_one_period() {
        let start = datetime!(2024-01-01 00:00);
        let end = start + Duration::nanoseconds(1);
        let schedule = generate_schedule(start, end, WatchPolicy::Halfway).unwrap();
        assert_eq!(schedule.periods.len(), 1);
        assert_eq!(schedule.periods[0].operator, Operator::One);
        assert_covers(&schedule);
    }

    #[test]
    fn max_hours_must_be_positive() {
        let start = datetime!(2024-01-01 00:00);
        let end = datetime!(2024-01-01 10:00);
        for max_hours in [0.0, -6.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                generate_schedule(start, end, WatchPolicy::CustomMaxWatch { max_hours }),
                Err(Error::InvalidConfig(_))
            ));
        }
    }
}
