use phugpa_calendar::{DatePair, TibetanDate, TibetanQuery};
use phugpa_practice::{CalendarInfo, DayRecord};
use phugpa_time::CivilDate;

use crate::error::PhugpaError;
use crate::global::table;

/// Tibetan date of a solar date; `None` outside the era.
pub fn tibetan_date_for(date: CivilDate) -> Result<Option<TibetanDate>, PhugpaError> {
    Ok(phugpa_calendar::tibetan_date_for(table()?, date))
}

/// All Tibetan dates matching `query`, each with its solar date.
///
/// Skipped days are listed with no solar date; doubled days appear twice.
pub fn solar_dates_for(query: TibetanQuery) -> Result<Vec<DatePair>, PhugpaError> {
    Ok(phugpa_calendar::solar_dates_for(table()?, &query))
}

/// Observance records for every era date of `[from, to]`.
pub fn day_records_for(from: CivilDate, to: CivilDate) -> Result<Vec<DayRecord>, PhugpaError> {
    Ok(phugpa_practice::day_records_for(table()?, from, to))
}

/// Observance records for one Gregorian month.
pub fn month_records(year: i32, month: u32) -> Result<Vec<DayRecord>, PhugpaError> {
    Ok(phugpa_practice::month_records(table()?, year, month)?)
}

/// Display metadata of the practice calendars.
pub fn calendars() -> &'static [CalendarInfo] {
    phugpa_practice::calendars()
}
