//! Error types for civil-date construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-date validation or text parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month or day outside the proleptic Gregorian calendar.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Text did not match `YYYY-MM-DD` or `YYYYMMDD`.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
