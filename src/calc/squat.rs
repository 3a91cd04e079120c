use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::parse_field;
use crate::utils::finite;

pub const FORMULA: &str = "Squat = 2 x Cb x V^2 / 100";

/// Minimum under keel clearance in meters (6 ft).
pub const MIN_UKC: f64 = 1.83;

#[derive(Debug, Clone, Copy, Default)]
pub struct SquatInput<'a> {
    pub least_charted_depth: &'a str,
    pub height_of_tide: &'a str,
    pub block_coefficient: &'a str,
    pub transit_speed: &'a str,
    pub deep_draft: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquatUkc {
    pub depth_at_hw: f64,
    pub squat: f64,
    pub max_static_draft: f64,
    pub draft: f64,
    pub ukc: f64,
    /// Set when the clearance is below [`MIN_UKC`].
    pub warning: bool,
}

/// Squat in meters for block coefficient `cb` at `speed_kn`.
pub fn squat(cb: f64, speed_kn: f64) -> f64 {
    cb * 2.0 * speed_kn.powi(2) / 100.0
}

impl SquatUkc {
    pub fn compute(charted: f64, tide: f64, cb: f64, speed_kn: f64, draft: f64) -> Self {
        let depth_at_hw = charted + tide;
        let squat = squat(cb, speed_kn);
        let ukc = depth_at_hw - draft - squat;

        SquatUkc {
            depth_at_hw,
            squat,
            max_static_draft: depth_at_hw - squat - MIN_UKC,
            draft,
            ukc,
            warning: ukc < MIN_UKC,
        }
    }
}

impl SquatInput<'_> {
    pub fn calculate(&self) -> Result<SquatUkc, Error> {
        let result = SquatUkc::compute(
            parse_field("least charted depth", self.least_charted_depth)?,
            parse_field("height of tide", self.height_of_tide)?,
            parse_field("block coefficient", self.block_coefficient)?,
            parse_field("transit speed", self.transit_speed)?,
            parse_field("deep draft", self.deep_draft)?,
        );
        for value in [result.depth_at_hw, result.squat, result.max_static_draft, result.ukc] {
            finite(value, "squat inputs out of range")?;
        }
        if result.warning {
            tracing::warn!(ukc = result.ukc, "under keel clearance below {MIN_UKC} m");
        }

        Ok(result)
    }
}

impl fmt::Display for SquatUkc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Water depth at HW: {:.2} m", self.depth_at_hw)?;
        writeln!(f, "Max static draft: {:.2} m", self.max_static_draft)?;
        writeln!(f, "Squat: {:.2} m", self.squat)?;
        write!(f, "UKC: {:.2} m", self.ukc)?;
        if self.warning {
            write!(f, " (WARNING: below {MIN_UKC} m)")?;
        }
        Ok(())
    }
}
