//! Convenience wrapper for the phugpa Tibetan calendar engine.
//!
//! Provides a shared month table built once per process and functions that
//! query it directly, removing the need to pass a `MonthTable` around.
//!
//! # Quick start
//!
//! ```rust
//! use phugpa_rs::*;
//!
//! let date: CivilDate = "2011-03-05".parse().unwrap();
//! let tibetan = tibetan_date_for(date).unwrap().unwrap();
//! assert_eq!((tibetan.month, tibetan.day), (1, 1));
//! ```

pub mod convenience;
pub mod error;
pub mod global;

// Primary re-exports; users should only need `use phugpa_rs::*`
pub use convenience::{
    calendars, day_records_for, month_records, solar_dates_for, tibetan_date_for,
};
pub use error::PhugpaError;
pub use global::{init, is_initialized, table};

pub use phugpa_calendar::{
    AnchorConfig, CalendarConfig, DatePair, DayKind, MonthDescriptor, MonthKind, MonthTable,
    TibetanDate, TibetanQuery,
};
pub use phugpa_practice::{
    CalendarInfo, DayRecord, IcalOptions, Observance, ObservanceType, render_ical,
};
pub use phugpa_time::CivilDate;
