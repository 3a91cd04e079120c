use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::parse_field;

pub const FORMULA: &str = "New RPM = current RPM / current speed x desired speed";

#[derive(Debug, Clone, Copy, Default)]
pub struct RpmInput<'a> {
    pub current_rpm: &'a str,
    pub current_speed: &'a str,
    pub desired_speed: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rpm {
    pub rpm: f64,
}

/// Shaft RPM for `desired_kn`, assuming speed scales linearly with RPM.
pub fn new_rpm(current_rpm: f64, current_kn: f64, desired_kn: f64) -> Result<f64, Error> {
    if current_kn == 0.0 {
        return Err(Error::DomainError("current speed must not be zero"));
    }
    crate::utils::finite(current_rpm / current_kn * desired_kn, "rpm out of range")
}

impl RpmInput<'_> {
    pub fn calculate(&self) -> Result<Rpm, Error> {
        let rpm = new_rpm(
            parse_field("current rpm", self.current_rpm)?,
            parse_field("current speed", self.current_speed)?,
            parse_field("desired speed", self.desired_speed)?,
        )?;

        Ok(Rpm { rpm })
    }
}

impl fmt::Display for Rpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}", self.rpm)
    }
}
