use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::parse::parse_field;
use crate::utils::{kn_to_mps, mps_to_kn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Feet,
    Meters,
    Fathoms,
    Shackles,
    Cables,
    StatuteMiles,
    NauticalMiles,
    MetersPerSecond,
    /// Nautical miles per hour.
    Knots,
}

impl Unit {
    pub const ALL: [Unit; 9] = [
        Unit::Feet,
        Unit::Meters,
        Unit::Fathoms,
        Unit::Shackles,
        Unit::Cables,
        Unit::StatuteMiles,
        Unit::NauticalMiles,
        Unit::MetersPerSecond,
        Unit::Knots,
    ];

    /// Length of one unit in meters. `None` for the two rate units.
    pub fn meters_per_unit(self) -> Option<f64> {
        match self {
            Unit::Feet => Some(0.3048),
            Unit::Meters => Some(1.0),
            Unit::Fathoms => Some(1.8288),
            Unit::Shackles => Some(crate::utils::METERS_PER_SHACKLE),
            Unit::Cables => Some(185.2),
            Unit::StatuteMiles => Some(1609.34),
            Unit::NauticalMiles => Some(crate::utils::METERS_PER_NM),
            Unit::MetersPerSecond | Unit::Knots => None,
        }
    }

    pub fn is_rate(self) -> bool {
        self.meters_per_unit().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Feet => "Feet",
            Unit::Meters => "Meters",
            Unit::Fathoms => "Fathoms",
            Unit::Shackles => "Shackles",
            Unit::Cables => "Cables",
            Unit::StatuteMiles => "Statute Miles",
            Unit::NauticalMiles => "Nautical Miles",
            Unit::MetersPerSecond => "Meters per second",
            Unit::Knots => "Nautical Miles per hour",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Accepts the display name as well as the usual abbreviations, ignoring case, spaces,
    /// dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        let unit = match key.as_str() {
            "ft" | "foot" | "feet" => Unit::Feet,
            "m" | "meter" | "meters" | "metre" | "metres" => Unit::Meters,
            "fm" | "fathom" | "fathoms" => Unit::Fathoms,
            "shackle" | "shackles" | "shot" | "shots" => Unit::Shackles,
            "cable" | "cables" => Unit::Cables,
            "sm" | "mi" | "statutemile" | "statutemiles" => Unit::StatuteMiles,
            "nm" | "nmi" | "nauticalmile" | "nauticalmiles" => Unit::NauticalMiles,
            "m/s" | "mps" | "meterspersecond" => Unit::MetersPerSecond,
            "kn" | "kt" | "kts" | "knot" | "knots" | "nauticalmilesperhour" => Unit::Knots,
            _ => return Err(Error::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

/// Convert `value` from one unit to another.
///
/// Length units convert through their meter factors. Meters per second and knots only convert
/// between each other; mixing a rate with a length fails with [`Error::IncompatibleUnits`].
pub fn convert_unit(value: f64, from: Unit, to: Unit) -> Result<f64, Error> {
    if from == to {
        return Ok(value);
    }

    match (from, to) {
        (Unit::MetersPerSecond, Unit::Knots) => Ok(mps_to_kn(value)),
        (Unit::Knots, Unit::MetersPerSecond) => Ok(kn_to_mps(value)),
        _ => match (from.meters_per_unit(), to.meters_per_unit()) {
            (Some(from_factor), Some(to_factor)) => Ok(value * from_factor / to_factor),
            _ => Err(Error::IncompatibleUnits { from, to }),
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConvertInput<'a> {
    pub value: &'a str,
    pub from: Unit,
    pub to: Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
    pub result: f64,
}

impl ConvertInput<'_> {
    pub fn calculate(&self) -> Result<Conversion, Error> {
        let value = parse_field("value", self.value)?;
        let result = convert_unit(value, self.from, self.to)?;
        tracing::debug!(value, from = %self.from, to = %self.to, result, "converted");

        Ok(Conversion {
            value,
            from: self.from,
            to: self.to,
            result,
        })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths() -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(|u| !u.is_rate())
    }

    #[test]
    fn identity_for_every_unit() {
        for unit in Unit::ALL {
            assert_eq!(convert_unit(12.5, unit, unit), Ok(12.5));
        }
    }

    #[test]
    fn length_conversions_return_to_start() {
        for a in lengths() {
            for b in lengths() {
                let there = convert_unit(123.456, a, b).unwrap();
                let back = convert_unit(there, b, a).unwrap();
                assert!((back - 123.456).abs() < 1e-9, "{a} -> {b} -> {a} gave {back}");
            }
        }
    }

    #[test]
    fn rate_pair() {
        let kn = convert_unit(1852.0 / 3600.0, Unit::MetersPerSecond, Unit::Knots).unwrap();
        assert!((kn - 1.0).abs() < 1e-12);
        let mps = convert_unit(10.0, Unit::Knots, Unit::MetersPerSecond).unwrap();
        assert!((mps - 5.1444).abs() < 1e-4);
    }

    #[test]
    fn mixing_rate_and_length_fails() {
        assert_eq!(
            convert_unit(1.0, Unit::Knots, Unit::NauticalMiles),
            Err(Error::IncompatibleUnits {
                from: Unit::Knots,
                to: Unit::NauticalMiles
            })
        );
        assert!(convert_unit(1.0, Unit::Meters, Unit::MetersPerSecond).is_err());
    }

    #[test]
    fn formats_four_decimals() {
        let conversion = ConvertInput {
            value: "1",
            from: Unit::Shackles,
            to: Unit::Fathoms,
        }
        .calculate()
        .unwrap();
        assert_eq!(conversion.to_string(), "15.0000");

        let conversion = ConvertInput {
            value: "100",
            from: Unit::Feet,
            to: Unit::Meters,
        }
        .calculate()
        .unwrap();
        assert_eq!(conversion.to_string(), "30.4800");
    }

    #[test]
    fn unit_names() {
        assert_eq!("Statute Miles".parse::<Unit>(), Ok(Unit::StatuteMiles));
        assert_eq!("kts".parse::<Unit>(), Ok(Unit::Knots));
        assert_eq!("m/s".parse::<Unit>(), Ok(Unit::MetersPerSecond));
        assert_eq!("NM".parse::<Unit>(), Ok(Unit::NauticalMiles));
        assert_eq!(
            "leagues".parse::<Unit>(),
            Err(Error::UnknownUnit("leagues".to_string()))
        );
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>(), Ok(unit));
        }
    }
}
