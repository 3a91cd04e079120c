use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::parse_field;

pub const FORMULA: &str = "TWS = sqrt(AWS^2 + BS^2 - 2 x AWS x BS x cos(AWA))\n\
    TWD = heading + atan2(AWS x sin(AWA), AWS x cos(AWA) - BS)";

#[derive(Debug, Clone, Copy, Default)]
pub struct TrueWindInput<'a> {
    pub apparent_speed: &'a str,
    /// Relative to the bow, 0-359 degrees clockwise.
    pub apparent_angle: &'a str,
    pub boat_speed: &'a str,
    pub heading: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrueWind {
    pub speed_kn: f64,
    /// True wind angle relative to the bow, -180 to 180 degrees (port negative).
    pub angle_deg: f64,
    /// Direction the wind blows from, 0 to 360 degrees.
    pub direction_deg: f64,
}

impl TrueWind {
    pub fn compute(apparent_speed: f64, apparent_angle: f64, boat_speed: f64, heading: f64) -> Self {
        let awa = if apparent_angle > 180.0 {
            apparent_angle - 360.0
        } else {
            apparent_angle
        }
        .to_radians();

        let speed_kn = (apparent_speed.powi(2) + boat_speed.powi(2)
            - 2.0 * apparent_speed * boat_speed * awa.cos())
        .sqrt();
        let angle_deg = (apparent_speed * awa.sin())
            .atan2(apparent_speed * awa.cos() - boat_speed)
            .to_degrees();
        let direction_deg = ((heading + angle_deg) % 360.0 + 360.0) % 360.0;

        TrueWind {
            speed_kn,
            angle_deg,
            direction_deg,
        }
    }

    /// Direction rounded to whole degrees, as displayed.
    pub fn direction_whole_deg(&self) -> f64 {
        self.direction_deg.round()
    }
}

impl TrueWindInput<'_> {
    pub fn calculate(&self) -> Result<TrueWind, Error> {
        let result = TrueWind::compute(
            parse_field("apparent wind speed", self.apparent_speed)?,
            parse_field("apparent wind angle", self.apparent_angle)?,
            parse_field("boat speed", self.boat_speed)?,
            parse_field("heading", self.heading)?,
        );
        if !result.speed_kn.is_finite() {
            return Err(Error::DomainError("true wind speed out of range"));
        }
        tracing::debug!(tws = result.speed_kn, twd = result.direction_deg, "true wind");

        Ok(result)
    }
}

impl fmt::Display for TrueWind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "True Wind Speed: {:.2} kn", self.speed_kn)?;
        write!(f, "True Wind Direction: {:.0}°", self.direction_whole_deg())
    }
}
