use crate::convert::Unit;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid input for {field}: {input:?}")]
    InvalidInput { field: &'static str, input: String },
    #[error("result is undefined: {0}")]
    DomainError(&'static str),
    #[error("end time must be after start time")]
    InvalidInterval,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("cannot convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },
}

impl Error {
    pub(crate) fn invalid_input(field: &'static str, input: impl Into<String>) -> Self {
        Error::InvalidInput {
            field,
            input: input.into(),
        }
    }
}
