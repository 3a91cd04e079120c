use time::macros::format_description;
use time::{Duration, PrimitiveDateTime};

use super::{OperatorNames, WatchPeriod};
use crate::error::Error;

/// Whole hours and minutes of `duration`, e.g. `3h`, `2h 30m` or `45m`. Seconds are dropped.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.whole_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 && minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}m", minutes)
    }
}

/// Total time underway between two instants.
///
/// When both instants share the same minute of the hour the interval is meant to be whole hours,
/// so any leftover (from seconds) rounds up to the next hour.
pub fn time_underway(start: PrimitiveDateTime, end: PrimitiveDateTime) -> Result<String, Error> {
    if end <= start {
        return Err(Error::InvalidInterval);
    }

    let duration = end - start;
    if start.minute() == end.minute() {
        let total_minutes = duration.whole_minutes();
        let hours = total_minutes / 60 + i64::from(total_minutes % 60 > 0);
        return Ok(format!("{}h", hours));
    }

    Ok(format_duration(duration))
}

/// Parse an instant written as `YYYY-MM-DDTHH:MM`, or with a space instead of the `T`.
pub fn parse_instant(text: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    let text = text.trim();
    PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .or_else(|_| {
            PrimitiveDateTime::parse(
                text,
                format_description!("[year]-[month]-[day] [hour]:[minute]"),
            )
        })
}

impl WatchPeriod {
    /// Render as `M/d HHmm - HHmm <operator> (<duration>)`.
    pub fn describe(&self, names: &OperatorNames) -> Result<String, time::error::Format> {
        let start = self.start.format(format_description!(
            "[month padding:none]/[day padding:none] [hour][minute]"
        ))?;
        let end = self.end.format(format_description!("[hour][minute]"))?;

        Ok(format!(
            "{} - {} {} ({})",
            start,
            end,
            names.name(self.operator),
            self.duration_text
        ))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::watch::Operator;

    #[test]
    fn duration_text() {
        assert_eq!(format_duration(Duration::hours(6)), "6h");
        assert_eq!(format_duration(Duration::minutes(150)), "2h 30m");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::seconds(59)), "0m");
        assert_eq!(format_duration(Duration::seconds(3 * 3600 + 59)), "3h");
    }

    #[test]
    fn underway_rounds_up_on_matching_minutes() {
        let start = datetime!(2024-01-01 08:30:40);
        let end = datetime!(2024-01-01 14:30:10);
        // 5h 59m 30s, but both instants read xx:30
        assert_eq!(time_underway(start, end).unwrap(), "6h");
    }

    #[test]
    fn underway_hours_and_minutes() {
        let start = datetime!(2024-01-01 08:30);
        assert_eq!(
            time_underway(start, datetime!(2024-01-01 14:45)).unwrap(),
            "6h 15m"
        );
        assert_eq!(
            time_underway(start, datetime!(2024-01-01 08:50)).unwrap(),
            "20m"
        );
        assert_eq!(
            time_underway(start, datetime!(2024-01-02 08:30)).unwrap(),
            "24h"
        );
    }

    #[test]
    fn underway_requires_order() {
        let at = datetime!(2024-01-01 08:30);
        assert_eq!(time_underway(at, at), Err(Error::InvalidInterval));
    }

    #[test]
    fn parses_both_separators() {
        assert_eq!(
            parse_instant("2024-01-01T06:00").unwrap(),
            datetime!(2024-01-01 06:00)
        );
        assert_eq!(
            parse_instant(" 2024-12-31 23:59 ").unwrap(),
            datetime!(2024-12-31 23:59)
        );
        assert!(parse_instant("yesterday").is_err());
    }

    #[test]
    fn describes_period() {
        let period = WatchPeriod::new(
            datetime!(2024-01-05 06:00),
            datetime!(2024-01-05 09:30),
            Operator::Two,
        );
        let names = OperatorNames {
            first: "Pilot 1".to_string(),
            second: "Pilot 2".to_string(),
        };
        assert_eq!(
            period.describe(&names).unwrap(),
            "1/5 0600 - 0930 Pilot 2 (3h 30m)"
        );
        assert_eq!(
            period.describe(&OperatorNames::default()).unwrap(),
            "1/5 0600 - 0930 Operator 2 (3h 30m)"
        );
    }
}
