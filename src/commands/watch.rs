use serde::Serialize;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use navcalc::parse::parse_field;
use navcalc::watch::{parse_instant, time_underway, OperatorNames, ScheduleRequest, WatchPolicy};

use super::Error;

#[derive(clap::ArgEnum, Clone, Copy, Debug)]
pub enum Policy {
    Halfway,
    Custom,
}

#[derive(clap::Parser)]
pub struct Opts {
    /// Start of the passage as YYYY-MM-DDTHH:MM (defaults to now)
    #[clap(long)]
    start: Option<String>,
    /// End of the passage as YYYY-MM-DDTHH:MM
    #[clap(long)]
    end: String,
    #[clap(long, arg_enum, default_value = "custom")]
    policy: Policy,
    /// Longest single watch in hours for the custom policy
    #[clap(long, env = "NAVCALC_MAX_WATCH_HOURS", default_value = "6")]
    max_hours: String,
    #[clap(long, default_value = "Operator 1")]
    first: String,
    #[clap(long, default_value = "Operator 2")]
    second: String,
}

#[derive(clap::Parser)]
pub struct UnderwayOpts {
    /// Start as YYYY-MM-DDTHH:MM (defaults to now)
    #[clap(long)]
    start: Option<String>,
    /// End as YYYY-MM-DDTHH:MM
    #[clap(long)]
    end: String,
}

#[derive(Serialize)]
struct ScheduleReport {
    total: String,
    periods: Vec<PeriodReport>,
}

#[derive(Serialize)]
struct PeriodReport {
    start: String,
    end: String,
    operator: String,
    duration: String,
}

#[tracing::instrument(skip_all, fields(policy = ?opts.policy))]
pub fn execute(opts: Opts, json: bool) -> Result<(), Error> {
    let policy = match opts.policy {
        Policy::Halfway => WatchPolicy::Halfway,
        Policy::Custom => WatchPolicy::CustomMaxWatch {
            max_hours: parse_field("max watch hours", &opts.max_hours)?,
        },
    };
    let request = ScheduleRequest {
        start: start_or_now(opts.start.as_deref())?,
        end: parse_instant(&opts.end)?,
        policy,
    };
    let schedule = request.generate()?;
    let names = OperatorNames {
        first: opts.first,
        second: opts.second,
    };

    if json {
        let iso = format_description!("[year]-[month]-[day]T[hour]:[minute]");
        let periods = schedule
            .periods
            .iter()
            .map(|p| {
                Ok(PeriodReport {
                    start: p.start.format(iso)?,
                    end: p.end.format(iso)?,
                    operator: names.name(p.operator).to_string(),
                    duration: p.duration_text.clone(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let report = ScheduleReport {
            total: schedule.total_text(),
            periods,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Total Time Underway: {}", schedule.total_text());
    println!("Watch Schedule:");
    for period in &schedule.periods {
        println!("{}", period.describe(&names)?);
    }
    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn underway(opts: UnderwayOpts, json: bool) -> Result<(), Error> {
    let start = start_or_now(opts.start.as_deref())?;
    let end = parse_instant(&opts.end)?;
    let total = time_underway(start, end)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&total)?);
    } else {
        println!("Total Time Underway: {}", total);
    }
    Ok(())
}

fn start_or_now(start: Option<&str>) -> Result<PrimitiveDateTime, Error> {
    if let Some(start) = start {
        return Ok(parse_instant(start)?);
    }

    let now = OffsetDateTime::now_local().unwrap_or_else(|err| {
        tracing::warn!(%err, "local offset unknown, using UTC");
        OffsetDateTime::now_utc()
    });
    Ok(PrimitiveDateTime::new(now.date(), now.time()))
}
