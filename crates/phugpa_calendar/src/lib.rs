//! Tibetan Phugpa calendar: month table and date conversion.
//!
//! The table is built once per [`CalendarConfig`] in three stages:
//! - month classification over the era (normal, double, inserted months)
//! - skip/double day annotation from the ephemeris weekday
//! - solar start dates propagated from a fixed anchor month
//!
//! After [`MonthTable::build`] returns, the table is immutable and all
//! queries take it by shared reference.

pub mod anchor;
pub mod annotate;
pub mod config;
pub mod convert;
pub mod error;
pub mod month_table;
pub mod types;

pub use config::{AnchorConfig, CalendarConfig};
pub use convert::{DatePair, TibetanQuery, solar_dates_for, tibetan_date_for};
pub use error::CalendarError;
pub use month_table::MonthTable;
pub use types::{DayKind, MonthDescriptor, MonthKind, TibetanDate};
