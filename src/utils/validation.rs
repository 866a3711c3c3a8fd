use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use validator::Validate;

use crate::models::employee::midnight_utc;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client-caused failures. Each variant renders as the message sent back
/// with a 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidParameter(&'static str),
    InvalidDate(&'static str),
    InvalidDateRange,
    InvalidBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidParameter(name) => {
                write!(f, "bad request, wrong {} parameter", name)
            }
            ValidationError::InvalidDate(name) => write!(f, "bad request, wrong {} parameter", name),
            ValidationError::InvalidDateRange => write!(f, "bad request, wrong dates range"),
            ValidationError::InvalidBody => write!(f, "bad request, wrong request body"),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ValidationError> {
    payload.validate().map_err(|err| {
        log::warn!("request body failed validation: {}", err);
        ValidationError::InvalidBody
    })
}

/// Strict `YYYY-MM-DD`: chrono alone accepts unpadded fields, signs and
/// short years, so the parsed date must format back to the exact input.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == raw).then_some(date)
}

/// Parses both assignment dates. `to_date` is checked before `from_date`, and
/// a range ending before it starts is rejected. Equal dates are allowed.
pub fn validate_dates(
    from_date: &str,
    to_date: &str,
) -> Result<(DateTime<Utc>, DateTime<Utc>), ValidationError> {
    let to_date = parse_date(to_date).ok_or(ValidationError::InvalidDate("to_date"))?;
    let from_date = parse_date(from_date).ok_or(ValidationError::InvalidDate("from_date"))?;

    if to_date < from_date {
        return Err(ValidationError::InvalidDateRange);
    }

    Ok((midnight_utc(from_date), midnight_utc(to_date)))
}
