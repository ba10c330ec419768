//! Observance days of the Tibetan calendar.
//!
//! This crate provides:
//! - The observance catalogue and per-date rules ([`observances`])
//! - Per-day records over a solar date range, including days whose lunar
//!   day number is skipped ([`day_records_for`], [`month_records`])
//! - Display metadata per observance type ([`calendars`])
//! - iCalendar export of day records ([`render_ical`])

pub mod calendars;
pub mod days;
pub mod error;
pub mod ical;
pub mod observance;
pub mod rules;

pub use calendars::{CalendarInfo, calendar_for, calendars};
pub use days::{DayRecord, day_record, day_records_for, month_records};
pub use error::PracticeError;
pub use ical::{IcalOptions, render_ical};
pub use observance::{Observance, ObservanceType};
pub use rules::observances;
