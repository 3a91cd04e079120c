use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::parse_field;

pub const FORMULA: &str = "Distance (nm) = speed (kn) x time (h)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StdMode {
    Speed,
    Time,
    Distance,
}

/// Raw inputs. Only the two fields the mode needs are read.
#[derive(Debug, Clone, Copy)]
pub struct StdInput<'a> {
    pub mode: StdMode,
    pub speed: &'a str,
    pub time: &'a str,
    pub distance: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedTimeDistance {
    pub mode: StdMode,
    pub value: f64,
}

pub fn speed(distance_nm: f64, time_h: f64) -> Result<f64, Error> {
    if time_h <= 0.0 {
        return Err(Error::DomainError("time must be positive"));
    }
    Ok(distance_nm / time_h)
}

pub fn time(distance_nm: f64, speed_kn: f64) -> Result<f64, Error> {
    if speed_kn <= 0.0 {
        return Err(Error::DomainError("speed must be positive"));
    }
    Ok(distance_nm / speed_kn)
}

pub fn distance(speed_kn: f64, time_h: f64) -> f64 {
    speed_kn * time_h
}

impl StdInput<'_> {
    pub fn calculate(&self) -> Result<SpeedTimeDistance, Error> {
        let value = match self.mode {
            StdMode::Speed => speed(
                parse_field("distance", self.distance)?,
                parse_field("time", self.time)?,
            )?,
            StdMode::Time => time(
                parse_field("distance", self.distance)?,
                parse_field("speed", self.speed)?,
            )?,
            StdMode::Distance => distance(
                parse_field("speed", self.speed)?,
                parse_field("time", self.time)?,
            ),
        };
        crate::utils::finite(value, "result out of range")?;

        Ok(SpeedTimeDistance {
            mode: self.mode,
            value,
        })
    }
}

impl fmt::Display for SpeedTimeDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            StdMode::Speed => write!(f, "{:.1} knots", self.value),
            StdMode::Time => write!(f, "{:.2} hours", self.value),
            StdMode::Distance => write!(f, "{:.1} nm", self.value),
        }
    }
}
