//! Error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use phugpa_calendar::CalendarError;
use phugpa_practice::PracticeError;
use phugpa_time::TimeError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PhugpaError {
    /// `init` was called after the shared table already exists.
    AlreadyInitialized,
    /// Building the month table failed.
    Calendar(CalendarError),
    /// Invalid solar date or month.
    Time(TimeError),
    Practice(PracticeError),
}

impl Display for PhugpaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => f.write_str("calendar already initialized"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Practice(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PhugpaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Practice(e) => Some(e),
            Self::AlreadyInitialized => None,
        }
    }
}

impl From<CalendarError> for PhugpaError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<TimeError> for PhugpaError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<PracticeError> for PhugpaError {
    fn from(e: PracticeError) -> Self {
        match e {
            PracticeError::Time(t) => Self::Time(t),
            other => Self::Practice(other),
        }
    }
}
