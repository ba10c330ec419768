//! Skipped and doubled lunar days.
//!
//! A lunar day whose true weekday repeats the previous one never begins on
//! any solar day (skipped). A day whose true weekday jumps two ahead spans
//! two solar days (doubled).

use phugpa_math::{MonthRoots, corrected_day, true_weekday};
use tracing::error;

use crate::error::CalendarError;
use crate::types::MonthDescriptor;

fn is_double(prev: i64, cur: i64) -> bool {
    (prev < 5 && cur == prev + 2) || (prev > 4 && cur == prev - 5)
}

fn fill(slots: &mut [u32; 2], day: u32) -> bool {
    match slots.iter_mut().find(|d| **d == 0) {
        Some(slot) => {
            *slot = day;
            true
        }
        None => false,
    }
}

/// Annotate one month given the true weekday of the previous month's last
/// day. Returns this month's day-30 weekday.
pub fn annotate_month(month: &mut MonthDescriptor, prev_weekday: i64) -> Result<i64, CalendarError> {
    let roots = MonthRoots::new(month.index);
    let mut prev = prev_weekday;

    for day in 1..=30u32 {
        let cur = corrected_day(&roots, i64::from(day))?.weekday_number();
        if cur == prev {
            if !fill(&mut month.skips, day) {
                error!(index = month.index, day, "third skipped day");
                return Err(CalendarError::SkipOverflow {
                    index: month.index,
                    day,
                });
            }
        } else if is_double(prev, cur) && !fill(&mut month.doubles, day) {
            error!(index = month.index, day, "third doubled day");
            return Err(CalendarError::DoubleOverflow {
                index: month.index,
                day,
            });
        }
        prev = cur;
    }

    let (skips, doubles) = (month.skip_count(), month.double_count());
    if doubles > skips || skips - doubles > 1 {
        error!(index = month.index, skips, doubles, "unbalanced month");
        return Err(CalendarError::UnbalancedMonth {
            index: month.index,
            skips,
            doubles,
        });
    }
    Ok(prev)
}

/// Annotate every month but the first, which only seeds the weekday chain.
pub fn annotate(months: &mut [MonthDescriptor]) -> Result<(), CalendarError> {
    let Some((first, rest)) = months.split_first_mut() else {
        return Ok(());
    };
    let mut prev = true_weekday(first.index, 30)?;
    for month in rest {
        prev = annotate_month(month, prev)?;
    }
    Ok(())
}
