use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::{parse_field, parse_optional};
use crate::utils::finite;

pub const FORMULA: &str = "Swept path = sqrt(L^2 + B^2) x sin(atan(B / L) + drift angle)";

/// Drift angles in degrees that are always reported.
pub const PRESET_DRIFT_ANGLES: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

// Extra angles closer than this to a preset are considered duplicates.
const DRIFT_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, Default)]
pub struct SweptPathInput<'a> {
    pub length: &'a str,
    pub beam: &'a str,
    /// Optional extra drift angle in degrees. Blank or non-positive values are ignored.
    pub additional_drift: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweptPathRow {
    pub drift_deg: f64,
    pub swept_path_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweptPath {
    /// One row per drift angle, ordered by ascending drift.
    pub rows: Vec<SweptPathRow>,
}

/// Width of water swept by a vessel of `length` x `beam` meters moving at `drift_deg` to its
/// heading.
pub fn swept_path(length: f64, beam: f64, drift_deg: f64) -> f64 {
    let diagonal = length.hypot(beam);
    let angle = (beam / length).atan();
    diagonal * (angle + drift_deg.to_radians()).sin()
}

impl SweptPath {
    pub fn compute(length: f64, beam: f64, additional_drift: Option<f64>) -> Result<Self, Error> {
        if length <= 0.0 || beam <= 0.0 {
            return Err(Error::DomainError("vessel length and beam must be positive"));
        }

        let mut drifts = PRESET_DRIFT_ANGLES.to_vec();
        match additional_drift {
            Some(extra) if extra > 0.0 => {
                if !drifts.iter().any(|d| (d - extra).abs() < DRIFT_TOLERANCE) {
                    drifts.push(extra);
                }
            }
            Some(extra) => tracing::debug!(extra, "ignoring non-positive drift angle"),
            None => {}
        }
        drifts.sort_by(f64::total_cmp);

        let rows: Vec<SweptPathRow> = drifts
            .into_iter()
            .map(|drift_deg| {
                Ok(SweptPathRow {
                    drift_deg,
                    swept_path_m: finite(
                        swept_path(length, beam, drift_deg),
                        "vessel dimensions out of range",
                    )?,
                })
            })
            .collect::<Result<_, Error>>()?;

        Ok(SweptPath { rows })
    }
}

impl SweptPathInput<'_> {
    pub fn calculate(&self) -> Result<SweptPath, Error> {
        SweptPath::compute(
            parse_field("length", self.length)?,
            parse_field("beam", self.beam)?,
            parse_optional("additional drift", self.additional_drift)?,
        )
    }
}

impl fmt::Display for SweptPathRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drift Angle {}°: Swept Path = {:.2} m",
            self.drift_deg, self.swept_path_m
        )
    }
}

impl fmt::Display for SweptPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
