//! Error types for month table construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use phugpa_math::MathError;

/// Integrity failures while building a [`MonthTable`](crate::MonthTable).
///
/// Lookups on a built table never fail; dates outside the era come back as
/// `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Configuration rejected before building.
    InvalidConfig(&'static str),
    /// Exact division in the ephemeris left a remainder.
    Math(MathError),
    /// A third skipped day was found in one month.
    SkipOverflow { index: i64, day: u32 },
    /// A third doubled day was found in one month.
    DoubleOverflow { index: i64, day: u32 },
    /// Skips and doubles do not leave a 29- or 30-day month.
    UnbalancedMonth { index: i64, skips: u32, doubles: u32 },
    /// The configured anchor month is not in the table.
    AnchorNotFound,
    /// Consecutive months are not consecutive month indices.
    SequenceGap { index: i64 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Math(e) => write!(f, "ephemeris error: {e}"),
            Self::SkipOverflow { index, day } => {
                write!(f, "more than two skipped days in month {index} (day {day})")
            }
            Self::DoubleOverflow { index, day } => {
                write!(f, "more than two doubled days in month {index} (day {day})")
            }
            Self::UnbalancedMonth {
                index,
                skips,
                doubles,
            } => write!(
                f,
                "month {index} has {skips} skipped and {doubles} doubled days"
            ),
            Self::AnchorNotFound => write!(f, "anchor month not found in era"),
            Self::SequenceGap { index } => write!(f, "month index gap after {index}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Math(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MathError> for CalendarError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}
