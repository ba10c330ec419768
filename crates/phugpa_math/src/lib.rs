//! Exact-integer ephemeris for the Tibetan Phugpa calendar.
//!
//! This crate provides:
//! - Mixed-radix digit vector primitives (carry, borrow, scaling, long division)
//! - Root positions for a month index: lunar weekday, mean sun, lunar anomaly
//! - Daily motions and the tabulated moon/sun equations
//! - The corrected lunar weekday and corrected sun for a lunar day
//!
//! No floating point is used anywhere; every quantity is a digit vector with
//! fixed per-position radices.

pub mod ephemeris;
pub mod error;
pub mod radix;

pub use ephemeris::{
    ANOMALY_RADICES, CorrectedDay, MonthRoots, SUN_RADICES, SunEquation, TRUE_WEEKDAY_RADICES,
    WEEKDAY_RADICES, corrected_day, mean_sun, mean_weekday, moon_equation, root_anomaly,
    root_sun, root_weekday, sun_daily_motion, sun_equation, true_weekday, weekday_daily_motion,
};
pub use error::MathError;
