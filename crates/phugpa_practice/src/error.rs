//! Error types for observance queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use phugpa_time::TimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeError {
    /// Unrecognized observance type code.
    UnknownObservance(String),
    /// Invalid solar date or month.
    Time(TimeError),
}

impl Display for PracticeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownObservance(code) => write!(f, "unknown observance type: {code}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for PracticeError {}

impl From<TimeError> for PracticeError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
