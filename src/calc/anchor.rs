use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::parse::{parse_field, parse_optional};
use crate::utils::{finite, m_to_nm, METERS_PER_SHACKLE};

pub const FORMULA: &str = "Normal wx shots = (3 x depth + 90) / 27.43\n\
    Rough wx shots = (4 x depth + 150) / 27.43\n\
    Walk out = (depth - 5) / 27.432\n\
    Swing circle (nm) = (sqrt(chain^2 - (depth + freeboard)^2) + LOA) / 1852";

// Rule of thumb divisor used for the scope estimates.
const SHOT_DIVISOR: f64 = 27.43;

/// Raw inputs. `freeboard` may be blank and defaults to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorInput<'a> {
    pub loa: &'a str,
    pub depth: &'a str,
    pub freeboard: &'a str,
    pub shackles: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorSwing {
    pub normal_wx_shots: f64,
    pub rough_wx_shots: f64,
    pub walk_out_shots: f64,
    /// Swing circle radius in nautical miles, `None` when the chain on deck is too short to
    /// reach the bottom.
    pub swing_circle_nm: Option<f64>,
}

impl AnchorSwing {
    pub fn compute(loa: f64, depth: f64, freeboard: f64, shackles: f64) -> Result<Self, Error> {
        Ok(AnchorSwing {
            normal_wx_shots: finite((depth * 3.0 + 90.0) / SHOT_DIVISOR, "depth out of range")?,
            rough_wx_shots: finite((depth * 4.0 + 150.0) / SHOT_DIVISOR, "depth out of range")?,
            walk_out_shots: finite((depth - 5.0) / METERS_PER_SHACKLE, "depth out of range")?,
            swing_circle_nm: swing_circle(loa, depth, freeboard, shackles)?,
        })
    }
}

/// Horizontal reach of the chain plus the vessel's length, in nautical miles.
///
/// `None` when the chain is shorter than the height from hawsepipe to bottom.
pub fn swing_circle(
    loa: f64,
    depth: f64,
    freeboard: f64,
    shackles: f64,
) -> Result<Option<f64>, Error> {
    let chain = shackles * METERS_PER_SHACKLE;
    let height = depth + freeboard;
    let under_radius_squared = finite(
        chain * chain - height * height,
        "chain or depth out of range",
    )?;
    if under_radius_squared < 0.0 {
        tracing::debug!(chain, height, "chain does not reach the bottom");
        return Ok(None);
    }

    finite(m_to_nm(under_radius_squared.sqrt() + loa), "swing circle out of range").map(Some)
}

impl AnchorInput<'_> {
    pub fn calculate(&self) -> Result<AnchorSwing, Error> {
        let loa = parse_field("loa", self.loa)?;
        let depth = parse_field("depth", self.depth)?;
        let shackles = parse_field("shackles", self.shackles)?;
        let freeboard = parse_optional("freeboard", self.freeboard)?.unwrap_or(0.0);

        AnchorSwing::compute(loa, depth, freeboard, shackles)
    }
}

impl fmt::Display for AnchorSwing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Normal Wx Shots: {:.1}", self.normal_wx_shots)?;
        writeln!(f, "Rough Wx Shots: {:.1}", self.rough_wx_shots)?;
        writeln!(f, "Walk Out Shots: {:.1}", self.walk_out_shots)?;
        match self.swing_circle_nm {
            Some(nm) => write!(f, "Swing Circle: {:.2} nm", nm),
            None => write!(f, "Swing Circle: Invalid"),
        }
    }
}
