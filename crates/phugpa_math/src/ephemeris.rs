//! Lunar weekday, sun and anomaly for a lunar day.
//!
//! Month roots are linear in the month index (`zladag`) and periodic, so
//! negative indices are shifted up by whole periods before use. Day `d` of a
//! month adds `d` daily motions to the roots, then the moon and sun equations
//! correct the mean weekday into the true weekday at the end of that day.

use crate::error::MathError;
use crate::radix::{
    accumulate, add_digits, borrow_flags, long_divide, multiply_digits, normalize,
    signed_correction, subtract_digits,
};

/// Weekday, 60ths, 60ths, 6ths, 707ths.
pub const WEEKDAY_RADICES: [i64; 5] = [7, 60, 60, 6, 707];
/// Lunar mansion, 60ths, 60ths, 6ths, 67ths.
pub const SUN_RADICES: [i64; 5] = [27, 60, 60, 6, 67];
/// Anomaly in days and 126ths.
pub const ANOMALY_RADICES: [i64; 2] = [28, 126];
/// The true weekday carries one more fractional digit than the mean one.
pub const TRUE_WEEKDAY_RADICES: [i64; 6] = [7, 60, 60, 6, 67, 707];

const WEEKDAY_PERIOD: i64 = 39_592;
const SUN_PERIOD: i64 = 804;
const ANOMALY_PERIOD: i64 = 3_528;

const WEEKDAY_ROOT_STEP: [i64; 5] = [1, 31, 50, 0, 480];
const WEEKDAY_ROOT_EPOCH: [i64; 5] = [6, 57, 53, 2, 20];
const SUN_ROOT_STEP: [i64; 5] = [2, 10, 58, 1, 17];
const SUN_ROOT_EPOCH: [i64; 5] = [25, 9, 10, 4, 32];
const ANOMALY_ROOT_STEP: [i64; 2] = [2, 1];
const ANOMALY_ROOT_EPOCH: [i64; 2] = [13, 103];

const WEEKDAY_DAILY: [i64; 5] = [0, 59, 3, 4, 16];
const SUN_DAILY: [i64; 5] = [0, 4, 21, 5, 43];

/// (base, increment) per 14th of the anomaly cycle.
const MOON_TABLE: [(i64, i64); 14] = [
    (0, 5),
    (5, 5),
    (10, 5),
    (15, 4),
    (19, 3),
    (22, 2),
    (24, 1),
    (25, 1),
    (24, 2),
    (22, 3),
    (19, 4),
    (15, 5),
    (10, 5),
    (5, 5),
];

/// (base, increment) per 135-minute segment of a half circle.
const SUN_TABLE: [(i64, i64); 6] = [(0, 6), (6, 4), (10, 1), (11, 1), (10, 4), (6, 6)];

/// Fractional digits of the moon correction: 60ths, 6ths, 707ths.
const MOON_FRACTION_RADICES: [i64; 4] = [0, 60, 6, 707];
/// Fractional digits of the sun correction: 60ths, 6ths, 67ths.
const SUN_FRACTION_RADICES: [i64; 4] = [0, 60, 6, 67];

fn shift_nonnegative(index: i64, period: i64) -> i64 {
    let mut i = index;
    while i < 0 {
        i += period;
    }
    i
}

/// Lunar weekday at the start of month `index`.
pub fn root_weekday(index: i64) -> [i64; 5] {
    let z = shift_nonnegative(index, WEEKDAY_PERIOD);
    accumulate(&WEEKDAY_ROOT_STEP, &WEEKDAY_ROOT_EPOCH, &WEEKDAY_RADICES, z)
}

/// Mean sun at the start of month `index`.
pub fn root_sun(index: i64) -> [i64; 5] {
    let z = shift_nonnegative(index, SUN_PERIOD);
    accumulate(&SUN_ROOT_STEP, &SUN_ROOT_EPOCH, &SUN_RADICES, z)
}

/// Lunar anomaly at the start of month `index`.
pub fn root_anomaly(index: i64) -> [i64; 2] {
    let z = shift_nonnegative(index, ANOMALY_PERIOD);
    accumulate(&ANOMALY_ROOT_STEP, &ANOMALY_ROOT_EPOCH, &ANOMALY_RADICES, z)
}

/// Weekday motion accumulated over `day` lunar days.
pub fn weekday_daily_motion(day: i64) -> [i64; 5] {
    accumulate(&WEEKDAY_DAILY, &[0; 5], &WEEKDAY_RADICES, day)
}

/// Solar motion accumulated over `day` lunar days.
pub fn sun_daily_motion(day: i64) -> [i64; 5] {
    accumulate(&SUN_DAILY, &[0; 5], &SUN_RADICES, day)
}

/// The three roots of one month, computed once and reused for every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRoots {
    pub index: i64,
    pub weekday: [i64; 5],
    pub sun: [i64; 5],
    pub anomaly: [i64; 2],
}

impl MonthRoots {
    pub fn new(index: i64) -> Self {
        Self {
            index,
            weekday: root_weekday(index),
            sun: root_sun(index),
            anomaly: root_anomaly(index),
        }
    }
}

/// Mean weekday at the end of lunar day `day`.
pub fn mean_weekday(roots: &MonthRoots, day: i64) -> [i64; 5] {
    add_digits(&roots.weekday, &weekday_daily_motion(day), &WEEKDAY_RADICES)
}

/// Mean sun at the end of lunar day `day`.
pub fn mean_sun(roots: &MonthRoots, day: i64) -> [i64; 5] {
    add_digits(&roots.sun, &sun_daily_motion(day), &SUN_RADICES)
}

/// Apply the moon equation to a mean weekday.
///
/// The anomaly step `anomaly[0] + day` picks a table row; its parity over
/// whole 14-step half cycles decides whether the correction is added or
/// subtracted. A subtracted result is left unnormalized.
pub fn moon_equation(
    mean: &[i64; 5],
    anomaly: &[i64; 2],
    day: i64,
) -> Result<[i64; 5], MathError> {
    let step = anomaly[0] + day;
    let row = step % 14;
    let (base, increment) = MOON_TABLE[row as usize];
    let (q, residue) = long_divide(
        &[anomaly[1] * increment, 0, 0, 0],
        &MOON_FRACTION_RADICES,
        126,
    );
    if residue != 0 {
        return Err(MathError::NonZeroResidue {
            stage: "moon equation",
            residue,
        });
    }
    let c = signed_correction(base, &q, &MOON_FRACTION_RADICES, row <= 6);
    let correction = [0, c[0], c[1], c[2], c[3]];

    if (step / 14) % 2 == 0 {
        Ok(add_digits(mean, &correction, &WEEKDAY_RADICES))
    } else {
        let borrows = borrow_flags(mean, &correction);
        Ok(subtract_digits(mean, &correction, &borrows, &WEEKDAY_RADICES))
    }
}

/// Sun correction in weekday fractions, and whether it is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEquation {
    pub correction: [i64; 5],
    pub additive: bool,
}

/// Sun equation for a mean sun position.
///
/// The solar anomaly is the mean sun less 6;45 mansions. Its second half
/// circle (13;30 and beyond) makes the correction additive.
pub fn sun_equation(mean: &[i64; 5]) -> Result<SunEquation, MathError> {
    let mut mansion = mean[0];
    if mansion < 6 {
        mansion += 27;
    }
    let mut minutes = mean[1];
    if minutes < 45 {
        mansion -= 1;
        minutes += 60;
    }
    let (a1, a2) = (mansion - 6, minutes - 45);

    let second_half = (a1 >= 13 && a2 >= 30) || a1 > 13;
    let (b1, b2) = if a1 >= 13 && a2 >= 30 {
        (a1 - 13, a2 - 30)
    } else if a1 > 13 {
        (a1 - 14, a2 + 30)
    } else {
        (a1, a2)
    };

    let position = 60 * b1 + b2;
    let segment = position / 135;
    let within = position % 135;
    let (base, increment) = SUN_TABLE[segment as usize];

    let scaled = multiply_digits(
        &[within, mean[2], mean[3], mean[4]],
        &SUN_FRACTION_RADICES,
        increment,
    );
    let (q, residue) = long_divide(&scaled, &SUN_FRACTION_RADICES, 135);
    if residue != 0 {
        return Err(MathError::NonZeroResidue {
            stage: "sun equation",
            residue,
        });
    }
    let c = signed_correction(base, &q, &SUN_FRACTION_RADICES, segment <= 2);

    Ok(SunEquation {
        correction: [0, c[0], c[1], c[2], c[3]],
        additive: second_half,
    })
}

/// Corrected weekday and sun at the end of a lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectedDay {
    pub weekday: [i64; 6],
    pub sun: [i64; 5],
}

impl CorrectedDay {
    /// Integer weekday, 0 = Saturday.
    pub fn weekday_number(&self) -> i64 {
        self.weekday[0]
    }
}

/// Full ephemeris for lunar day `day` of the month with `roots`.
pub fn corrected_day(roots: &MonthRoots, day: i64) -> Result<CorrectedDay, MathError> {
    let mean_wd = mean_weekday(roots, day);
    let mean_sn = mean_sun(roots, day);
    let half = moon_equation(&mean_wd, &roots.anomaly, day)?;
    let eq = sun_equation(&mean_sn)?;

    let mut sun = if eq.additive {
        add_digits(&mean_sn, &eq.correction, &SUN_RADICES)
    } else {
        let borrows = borrow_flags(&mean_sn, &eq.correction);
        subtract_digits(&mean_sn, &eq.correction, &borrows, &SUN_RADICES)
    };

    // The 707ths of the half-corrected weekday are rescaled to 67ths,
    // keeping the leftover as a sixth digit.
    let scaled = 67 * half[4];
    let (in_67ths, leftover) = (scaled / 707, scaled % 707);
    let minuend = [half[0], half[1], half[2], half[3], in_67ths];
    let head_radices = [
        TRUE_WEEKDAY_RADICES[0],
        TRUE_WEEKDAY_RADICES[1],
        TRUE_WEEKDAY_RADICES[2],
        TRUE_WEEKDAY_RADICES[3],
        TRUE_WEEKDAY_RADICES[4],
    ];
    let c = &eq.correction;

    let (head, tail) = if eq.additive {
        (add_digits(&minuend, c, &head_radices), leftover)
    } else {
        // The 67ths position always gives up one unit to the complemented
        // 707ths, and borrows when the correction exceeds what is left.
        let mut borrows = borrow_flags(&minuend, c);
        borrows[4] = c[4] - 1 > in_67ths;
        let mut d = subtract_digits(&minuend, c, &borrows, &head_radices);
        d[4] -= 1;
        (d, 707 - leftover)
    };
    let mut weekday = [head[0], head[1], head[2], head[3], head[4], tail];

    normalize(&mut sun, &SUN_RADICES);
    normalize(&mut weekday, &TRUE_WEEKDAY_RADICES);

    Ok(CorrectedDay { weekday, sun })
}

/// Integer true weekday at the end of lunar day `day` of month `index`.
pub fn true_weekday(index: i64, day: i64) -> Result<i64, MathError> {
    corrected_day(&MonthRoots::new(index), day).map(|d| d.weekday_number())
}
