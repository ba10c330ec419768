//! Day-precision proleptic Gregorian date.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{calendar_to_jdn, days_in_month, jdn_to_calendar};

/// A validated solar calendar date.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a date, rejecting months outside 1..=12 and days past the month end.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Date `days` later (earlier when negative).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// The following day.
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: &CivilDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// ISO-8601 weekday: Monday = 1 .. Sunday = 7.
    pub fn weekday(&self) -> u32 {
        (self.jdn().rem_euclid(7) + 1) as u32
    }

    /// First and last day of a solar month.
    pub fn month_bounds(year: i32, month: u32) -> Result<(Self, Self), TimeError> {
        let first = Self::new(year, month, 1)?;
        let last = Self::new(year, month, days_in_month(year, month))?;
        Ok((first, last))
    }

    /// Every date of `[from, to]`; empty when `from > to`.
    pub fn range_inclusive(from: CivilDate, to: CivilDate) -> DateRange {
        DateRange {
            next: (from <= to).then_some(from),
            end: to,
        }
    }
}

/// Iterator over an inclusive span of dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<CivilDate>,
    end: CivilDate,
}

impl Iterator for DateRange {
    type Item = CivilDate;

    fn next(&mut self) -> Option<CivilDate> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current.succ());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| (self.end.days_since(&d) + 1) as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD` and the compact `YYYYMMDD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || TimeError::Parse(format!("expected YYYY-MM-DD or YYYYMMDD, got '{s}'"));

        let (y, m, d) = if s.contains('-') {
            let parts: Vec<&str> = s.split('-').collect();
            if parts.len() != 3 {
                return Err(bad());
            }
            (parts[0], parts[1], parts[2])
        } else if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            (&s[0..4], &s[4..6], &s[6..8])
        } else {
            return Err(bad());
        };

        let year = y.parse::<i32>().map_err(|_| bad())?;
        let month = m.parse::<u32>().map_err(|_| bad())?;
        let day = d.parse::<u32>().map_err(|_| bad())?;
        Self::new(year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2023, 13, 1).is_err());
        assert!(CivilDate::new(2023, 4, 31).is_err());
        assert!(CivilDate::new(2023, 4, 0).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn add_days_crosses_year() {
        assert_eq!(date(2008, 12, 31).succ(), date(2009, 1, 1));
        assert_eq!(date(2009, 1, 1).add_days(-1), date(2008, 12, 31));
        assert_eq!(date(1988, 2, 18).add_days(30), date(1988, 3, 19));
    }

    #[test]
    fn days_since_is_signed() {
        let a = date(2011, 3, 5);
        let b = date(2011, 3, 19);
        assert_eq!(b.days_since(&a), 14);
        assert_eq!(a.days_since(&b), -14);
    }

    #[test]
    fn weekday_iso() {
        // 2000-01-01 was a Saturday
        assert_eq!(date(2000, 1, 1).weekday(), 6);
        // 2011-03-05 was a Saturday, 2011-03-06 a Sunday
        assert_eq!(date(2011, 3, 6).weekday(), 7);
        assert_eq!(date(2011, 3, 7).weekday(), 1);
    }

    #[test]
    fn parse_both_forms() {
        assert_eq!("2008-12-05".parse::<CivilDate>().unwrap(), date(2008, 12, 5));
        assert_eq!("20081205".parse::<CivilDate>().unwrap(), date(2008, 12, 5));
        assert!("2008/12/05".parse::<CivilDate>().is_err());
        assert!("2008-12".parse::<CivilDate>().is_err());
        assert!("2008-02-30".parse::<CivilDate>().is_err());
    }

    #[test]
    fn display_pads() {
        assert_eq!(date(988, 3, 7).to_string(), "0988-03-07");
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date(2010, 12, 31) < date(2011, 1, 1));
        assert!(date(2011, 2, 1) > date(2011, 1, 31));
    }

    #[test]
    fn range_inclusive_counts() {
        let days: Vec<_> = CivilDate::range_inclusive(date(2020, 2, 27), date(2020, 3, 1)).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], date(2020, 2, 29));
        assert_eq!(
            CivilDate::range_inclusive(date(2020, 2, 27), date(2020, 3, 1)).len(),
            4
        );
    }

    #[test]
    fn range_inclusive_empty_when_reversed() {
        assert_eq!(
            CivilDate::range_inclusive(date(2020, 3, 1), date(2020, 2, 1)).count(),
            0
        );
    }

    #[test]
    fn single_day_range() {
        let d = date(2020, 3, 1);
        assert_eq!(CivilDate::range_inclusive(d, d).collect::<Vec<_>>(), vec![d]);
    }

    #[test]
    fn month_bounds_february() {
        let (first, last) = CivilDate::month_bounds(2020, 2).unwrap();
        assert_eq!(first, date(2020, 2, 1));
        assert_eq!(last, date(2020, 2, 29));
    }
}
