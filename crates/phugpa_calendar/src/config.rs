//! Month table configuration.

use phugpa_time::CivilDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// JDN of 1988-02-18, first day of month 1, year 2, rabjung 17.
const DEFAULT_ANCHOR_JDN: i64 = 2_447_210;

/// A normal month with a known solar start date.
///
/// Every other month's start is derived from this one by adding or
/// subtracting month lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorConfig {
    pub rabjung: i32,
    pub year: u32,
    pub month: u32,
    pub date: CivilDate,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            rabjung: 17,
            year: 2,
            month: 1,
            date: CivilDate::from_jdn(DEFAULT_ANCHOR_JDN),
        }
    }
}

/// Era and anchor for [`MonthTable::build`](crate::MonthTable::build).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First 60-year cycle of the era. Default: 1 (starting 1027).
    pub first_rabjung: i32,
    /// Last 60-year cycle of the era, inclusive. Default: 20.
    pub last_rabjung: i32,
    pub anchor: AnchorConfig,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_rabjung: 1,
            last_rabjung: 20,
            anchor: AnchorConfig::default(),
        }
    }
}

impl CalendarConfig {
    /// Era of the given cycles with the default anchor.
    pub fn with_era(first_rabjung: i32, last_rabjung: i32) -> Self {
        Self {
            first_rabjung,
            last_rabjung,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.first_rabjung < 1 {
            return Err(CalendarError::InvalidConfig("first_rabjung must be >= 1"));
        }
        if self.first_rabjung > self.last_rabjung {
            return Err(CalendarError::InvalidConfig(
                "first_rabjung must not exceed last_rabjung",
            ));
        }
        let a = &self.anchor;
        if a.rabjung < self.first_rabjung || a.rabjung > self.last_rabjung {
            return Err(CalendarError::InvalidConfig("anchor rabjung outside era"));
        }
        if !(1..=60).contains(&a.year) {
            return Err(CalendarError::InvalidConfig("anchor year must be 1-60"));
        }
        if !(1..=12).contains(&a.month) {
            return Err(CalendarError::InvalidConfig("anchor month must be 1-12"));
        }
        Ok(())
    }
}
