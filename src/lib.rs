pub mod calc;
pub mod convert;
pub mod error;
pub mod parse;
pub mod utils;
pub mod watch;

pub use convert::{convert_unit, Unit};
pub use error::Error;
pub use parse::parse_number;
pub use watch::{generate_schedule, Schedule, ScheduleRequest, WatchPeriod, WatchPolicy};
