//! Per-day observance records over solar date ranges.

use phugpa_calendar::{MonthTable, TibetanDate, tibetan_date_for};
use phugpa_time::CivilDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::PracticeError;
use crate::observance::Observance;
use crate::rules::observances;

/// Observances falling on one solar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: CivilDate,
    /// The lunar day that actually occupies `date`.
    pub tibetan: TibetanDate,
    /// Observances of `tibetan`, then those of a following skipped day.
    pub observances: Vec<Observance>,
}

/// Day record for a single solar date, `None` outside the era.
///
/// If the next lunar day number is skipped in the calendar, its observances
/// are kept on this date after the regular ones.
pub fn day_record(table: &MonthTable, date: CivilDate) -> Option<DayRecord> {
    let tibetan = tibetan_date_for(table, date)?;
    let mut obs = observances(&tibetan);

    if let Some(next) = tibetan_date_for(table, date.succ()) {
        if i64::from(next.day) - i64::from(tibetan.day) == 2 {
            let skipped = tibetan.virtual_successor();
            trace!(%date, day = skipped.day, "observing skipped lunar day");
            obs.extend(observances(&skipped));
        }
    }

    Some(DayRecord {
        date,
        tibetan,
        observances: obs,
    })
}

/// Day records for every date of `[from, to]`.
///
/// Dates outside the era have no record. Empty when `from > to`.
pub fn day_records_for(table: &MonthTable, from: CivilDate, to: CivilDate) -> Vec<DayRecord> {
    CivilDate::range_inclusive(from, to)
        .filter_map(|date| day_record(table, date))
        .collect()
}

/// Day records for one Gregorian month.
pub fn month_records(
    table: &MonthTable,
    year: i32,
    month: u32,
) -> Result<Vec<DayRecord>, PracticeError> {
    let (first, last) = CivilDate::month_bounds(year, month)?;
    Ok(day_records_for(table, first, last))
}
