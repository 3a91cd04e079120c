use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::parse_field;
use crate::utils::finite;

/// Degrees per minute turned by a vessel making one knot on a one mile radius (`180 / 60 / PI`).
pub const ROT_FACTOR: f64 = 0.955;

pub const FORMULA: &str = "ROT (deg/min) = 0.955 x speed (kn) / radius (nm)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RotMode {
    /// Solve for the rate of turn from speed and radius.
    Rot,
    /// Solve for the radius from speed and rate of turn.
    Radius,
    /// Solve for the speed from rate of turn and radius.
    Speed,
}

pub fn rate_of_turn(speed_kn: f64, radius_nm: f64) -> Result<f64, Error> {
    finite(ROT_FACTOR * speed_kn / radius_nm, "radius must not be zero")
}

pub fn turn_radius(speed_kn: f64, rot_deg_min: f64) -> Result<f64, Error> {
    finite(ROT_FACTOR * speed_kn / rot_deg_min, "rate of turn must not be zero")
}

pub fn turn_speed(rot_deg_min: f64, radius_nm: f64) -> Result<f64, Error> {
    finite(rot_deg_min * radius_nm / ROT_FACTOR, "speed out of range")
}

/// Raw inputs. Only the two fields the mode needs are read.
#[derive(Debug, Clone, Copy)]
pub struct RotInput<'a> {
    pub mode: RotMode,
    pub speed: &'a str,
    pub radius: &'a str,
    pub rot: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateOfTurn {
    pub mode: RotMode,
    pub value: f64,
}

impl RotInput<'_> {
    pub fn calculate(&self) -> Result<RateOfTurn, Error> {
        let value = match self.mode {
            RotMode::Rot => rate_of_turn(
                parse_field("speed", self.speed)?,
                parse_field("radius", self.radius)?,
            )?,
            RotMode::Radius => turn_radius(
                parse_field("speed", self.speed)?,
                parse_field("rot", self.rot)?,
            )?,
            RotMode::Speed => turn_speed(
                parse_field("rot", self.rot)?,
                parse_field("radius", self.radius)?,
            )?,
        };
        tracing::debug!(mode = ?self.mode, value, "rate of turn");

        Ok(RateOfTurn {
            mode: self.mode,
            value,
        })
    }
}

impl fmt::Display for RateOfTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.mode {
            RotMode::Rot => "deg/min",
            RotMode::Radius => "nm",
            RotMode::Speed => "knots",
        };
        write!(f, "{:.2} {}", self.value, unit)
    }
}
