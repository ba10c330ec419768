//! Civil (solar) dates for the Phugpa calendar engine.
//!
//! This crate provides:
//! - Julian Day Number ↔ proleptic Gregorian calendar conversions
//! - [`CivilDate`], a validated day-precision date with day arithmetic
//! - Inclusive date-range iteration
//!
//! All arithmetic is exact-integer. The proleptic Gregorian calendar is used
//! for every year, including those before the 1582 reform.

pub mod civil_date;
pub mod error;
pub mod julian;

pub use civil_date::{CivilDate, DateRange};
pub use error::TimeError;
pub use julian::{calendar_to_jdn, days_in_month, is_leap_year, jdn_to_calendar};
