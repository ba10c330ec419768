//! Tibetan date and month descriptor types.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use phugpa_time::CivilDate;
use serde::{Deserialize, Serialize};

/// Position of a month within a double (intercalary) month pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonthKind {
    Normal,
    /// First occurrence of a doubled month number.
    FirstOfDouble,
    /// Second occurrence of a doubled month number.
    SecondOfDouble,
}

impl MonthKind {
    /// All kinds in table order.
    pub const ALL: [MonthKind; 3] = [Self::Normal, Self::FirstOfDouble, Self::SecondOfDouble];

    /// Numeric flag used in tabular output: 0, 1 or 2.
    pub const fn flag(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::FirstOfDouble => 1,
            Self::SecondOfDouble => 2,
        }
    }
}

/// Position of a solar day within a doubled lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayKind {
    #[default]
    Normal,
    FirstOfDouble,
    SecondOfDouble,
}

/// A Tibetan calendar date.
///
/// Equality and hashing cover `(rabjung, year, month, month_kind, day)`.
/// `virtual_skipped` and `day_kind` describe how the date was reached and
/// are ignored, so both solar days of a doubled day compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TibetanDate {
    /// 60-year cycle number.
    pub rabjung: i32,
    /// Year within the cycle, 1-60.
    pub year: u32,
    /// Month number, 1-12.
    pub month: u32,
    pub month_kind: MonthKind,
    /// Lunar day, 1-30.
    pub day: u32,
    /// Day number that does not occur this month, evaluated on the solar day
    /// before it.
    pub virtual_skipped: bool,
    pub day_kind: DayKind,
}

impl TibetanDate {
    pub fn new(rabjung: i32, year: u32, month: u32, month_kind: MonthKind, day: u32) -> Self {
        Self {
            rabjung,
            year,
            month,
            month_kind,
            day,
            virtual_skipped: false,
            day_kind: DayKind::Normal,
        }
    }

    /// The skipped day number following `self`, marked virtual.
    pub fn virtual_successor(&self) -> Self {
        Self {
            day: self.day + 1,
            virtual_skipped: true,
            day_kind: DayKind::Normal,
            ..*self
        }
    }

    fn key(&self) -> (i32, u32, u32, MonthKind, u32) {
        (self.rabjung, self.year, self.month, self.month_kind, self.day)
    }
}

impl PartialEq for TibetanDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TibetanDate {}

impl Hash for TibetanDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Display for TibetanDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rabjung {}, year {}, month {}",
            self.rabjung, self.year, self.month
        )?;
        match self.month_kind {
            MonthKind::Normal => {}
            MonthKind::FirstOfDouble => write!(f, " (first)")?,
            MonthKind::SecondOfDouble => write!(f, " (second)")?,
        }
        write!(f, ", day {}", self.day)?;
        match self.day_kind {
            DayKind::Normal => {}
            DayKind::FirstOfDouble => write!(f, " (first)")?,
            DayKind::SecondOfDouble => write!(f, " (second)")?,
        }
        if self.virtual_skipped {
            write!(f, " (skipped)")?;
        }
        Ok(())
    }
}

/// One Tibetan month of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDescriptor {
    pub rabjung: i32,
    pub year: u32,
    pub month: u32,
    pub kind: MonthKind,
    /// Corrected month count (zla-dag) driving the ephemeris; zero at month 2
    /// of year 1 of the 16th cycle.
    pub index: i64,
    /// Signed position relative to the anchor month.
    pub sequence: i64,
    /// Skipped day numbers, 0 = none, ascending.
    pub skips: [u32; 2],
    /// Doubled day numbers, 0 = none, ascending.
    pub doubles: [u32; 2],
    /// Solar date of lunar day 1, set by anchor propagation.
    pub start: Option<CivilDate>,
}

impl MonthDescriptor {
    pub(crate) fn new(rabjung: i32, year: u32, month: u32, kind: MonthKind, index: i64) -> Self {
        Self {
            rabjung,
            year,
            month,
            kind,
            index,
            sequence: 0,
            skips: [0; 2],
            doubles: [0; 2],
            start: None,
        }
    }

    pub fn skip_count(&self) -> u32 {
        self.skips.iter().filter(|&&d| d != 0).count() as u32
    }

    pub fn double_count(&self) -> u32 {
        self.doubles.iter().filter(|&&d| d != 0).count() as u32
    }

    pub fn is_skipped(&self, day: u32) -> bool {
        day != 0 && self.skips.contains(&day)
    }

    pub fn is_doubled(&self, day: u32) -> bool {
        day != 0 && self.doubles.contains(&day)
    }

    /// Solar days spanned by this month.
    pub fn day_count(&self) -> u32 {
        30 - self.skip_count() + self.double_count()
    }

    /// First solar date after this month.
    pub fn end(&self) -> Option<CivilDate> {
        self.start.map(|s| s.add_days(i64::from(self.day_count())))
    }

    /// Whether this descriptor is the month `(rabjung, year, month, kind)`.
    pub fn is(&self, rabjung: i32, year: u32, month: u32, kind: MonthKind) -> bool {
        self.rabjung == rabjung && self.year == year && self.month == month && self.kind == kind
    }
}
