use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::parse_field;
use crate::utils::finite;

pub const FORMULA: &str = "Lead distance = radius x tan(course change / 2)";

#[derive(Debug, Clone, Copy, Default)]
pub struct TurnInput<'a> {
    pub leg1: &'a str,
    pub leg2: &'a str,
    pub radius: &'a str,
}

/// Parallel index for a turn between two legs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurnIndex {
    /// Course change in degrees, 0 to 180.
    pub course_change_deg: f64,
    /// Distance before the wheel-over point at which to start the turn, in nautical miles.
    pub lead_distance_nm: f64,
}

/// Smallest angle between two courses.
pub fn course_change(leg1: f64, leg2: f64) -> f64 {
    let delta = (leg1 - leg2).abs();
    if delta > 180.0 {
        360.0 - delta
    } else {
        delta
    }
}

impl TurnIndex {
    pub fn compute(leg1: f64, leg2: f64, radius_nm: f64) -> Result<Self, Error> {
        let course_change_deg = course_change(leg1, leg2);
        let lead_distance_nm = finite(
            radius_nm * (course_change_deg / 2.0).to_radians().tan(),
            "course change out of range",
        )?;

        Ok(TurnIndex {
            course_change_deg,
            lead_distance_nm,
        })
    }
}

impl TurnInput<'_> {
    pub fn calculate(&self) -> Result<TurnIndex, Error> {
        TurnIndex::compute(
            parse_field("leg 1", self.leg1)?,
            parse_field("leg 2", self.leg2)?,
            parse_field("radius", self.radius)?,
        )
    }
}

impl fmt::Display for TurnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course Change: {:.0}°", self.course_change_deg)?;
        write!(f, "PI for Turn: {:.2} nm", self.lead_distance_nm)
    }
}
