//! Navigation formulas.
//!
//! Every calculator comes as a typed numeric core plus an input struct of raw text fields whose
//! `calculate()` parses the fields and returns either the full result or a single [`Error`].
//!
//! [`Error`]: crate::Error

pub mod anchor;
pub mod rot;
pub mod rpm;
pub mod speed_time_distance;
pub mod squat;
pub mod swept_path;
pub mod true_wind;
pub mod turn;

pub use anchor::{AnchorInput, AnchorSwing};
pub use rot::{RateOfTurn, RotInput, RotMode};
pub use rpm::{Rpm, RpmInput};
pub use speed_time_distance::{SpeedTimeDistance, StdInput, StdMode};
pub use squat::{SquatInput, SquatUkc};
pub use swept_path::{SweptPath, SweptPathInput, SweptPathRow};
pub use true_wind::{TrueWind, TrueWindInput};
pub use turn::{TurnIndex, TurnInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
    RateOfTurn,
    TurnIndex,
    Rpm,
    SpeedTimeDistance,
    AnchorSwing,
    SquatUkc,
    UnitConverter,
    SweptPath,
    TrueWind,
    WatchSchedule,
}

impl Calculator {
    pub const ALL: [Calculator; 10] = [
        Calculator::RateOfTurn,
        Calculator::TurnIndex,
        Calculator::Rpm,
        Calculator::SpeedTimeDistance,
        Calculator::AnchorSwing,
        Calculator::SquatUkc,
        Calculator::UnitConverter,
        Calculator::SweptPath,
        Calculator::TrueWind,
        Calculator::WatchSchedule,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Calculator::RateOfTurn => "Rate of Turn",
            Calculator::TurnIndex => "Turn Calculator",
            Calculator::Rpm => "RPM Calculator",
            Calculator::SpeedTimeDistance => "Speed, Time, Distance",
            Calculator::AnchorSwing => "Anchor Swing",
            Calculator::SquatUkc => "Squat / UKC",
            Calculator::UnitConverter => "Convert Units",
            Calculator::SweptPath => "Swept Path",
            Calculator::TrueWind => "True Wind",
            Calculator::WatchSchedule => "Watch Schedule",
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            Calculator::RateOfTurn => "rot",
            Calculator::TurnIndex => "turn",
            Calculator::Rpm => "rpm",
            Calculator::SpeedTimeDistance => "std",
            Calculator::AnchorSwing => "anchor",
            Calculator::SquatUkc => "squat",
            Calculator::UnitConverter => "convert",
            Calculator::SweptPath => "swept-path",
            Calculator::TrueWind => "true-wind",
            Calculator::WatchSchedule => "watch",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Calculator::RateOfTurn => rot::FORMULA,
            Calculator::TurnIndex => turn::FORMULA,
            Calculator::Rpm => rpm::FORMULA,
            Calculator::SpeedTimeDistance => speed_time_distance::FORMULA,
            Calculator::AnchorSwing => anchor::FORMULA,
            Calculator::SquatUkc => squat::FORMULA,
            Calculator::UnitConverter => "Value x meters per source unit / meters per target unit",
            Calculator::SweptPath => swept_path::FORMULA,
            Calculator::TrueWind => true_wind::FORMULA,
            Calculator::WatchSchedule => crate::watch::DESCRIPTION,
        }
    }
}
