use std::fmt;

use serde::Serialize;

pub mod calc;
pub mod convert;
pub mod list;
pub mod watch;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Calc(#[from] navcalc::Error),
    #[error("failed to parse date and time (expected YYYY-MM-DDTHH:MM)")]
    Time(#[from] time::error::Parse),
    #[error("failed to format date and time")]
    Format(#[from] time::error::Format),
    #[error("failed to serialize result")]
    Json(#[from] serde_json::Error),
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Convert between length or speed units
    Convert(convert::Opts),
    /// Rate of turn, turn radius or speed
    Rot(calc::RotOpts),
    /// Anchor scope and swing circle
    Anchor(calc::AnchorOpts),
    /// Squat and under keel clearance
    Squat(calc::SquatOpts),
    /// Swept path for a range of drift angles
    SweptPath(calc::SweptPathOpts),
    /// True wind from apparent wind
    TrueWind(calc::TrueWindOpts),
    /// Parallel index for a turn
    Turn(calc::TurnOpts),
    /// Speed, time and distance
    Std(calc::StdOpts),
    /// RPM for a desired speed
    Rpm(calc::RpmOpts),
    /// Watch schedule for two operators
    Watch(watch::Opts),
    /// Total time underway
    Underway(watch::UnderwayOpts),
    /// List the available calculators
    List,
}

pub fn execute(command: Command, json: bool) -> Result<(), Error> {
    match command {
        Command::Convert(opts) => convert::execute(opts, json),
        Command::Rot(opts) => calc::rot(opts, json),
        Command::Anchor(opts) => calc::anchor(opts, json),
        Command::Squat(opts) => calc::squat(opts, json),
        Command::SweptPath(opts) => calc::swept_path(opts, json),
        Command::TrueWind(opts) => calc::true_wind(opts, json),
        Command::Turn(opts) => calc::turn(opts, json),
        Command::Std(opts) => calc::speed_time_distance(opts, json),
        Command::Rpm(opts) => calc::rpm(opts, json),
        Command::Watch(opts) => watch::execute(opts, json),
        Command::Underway(opts) => watch::underway(opts, json),
        Command::List => list::execute(json),
    }
}

fn print<T: Serialize + fmt::Display>(output: &T, json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}
