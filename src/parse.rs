use crate::error::Error;

/// Parse a user supplied number.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite input (`inf`, `NaN`) is
/// rejected with [`Error::InvalidInput`].
pub fn parse_number(text: &str) -> Result<f64, Error> {
    parse_field("value", text)
}

/// Same as [`parse_number`], but names `field` in the error.
pub fn parse_field(field: &'static str, text: &str) -> Result<f64, Error> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::trace!(field, input = text, "rejected numeric input");
            Err(Error::invalid_input(field, text))
        }
    }
}

/// Parse an optional field. Blank text means the field was left out.
pub fn parse_optional(field: &'static str, text: &str) -> Result<Option<f64>, Error> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_field(field, text).map(Some)
}
