//! Solar start dates for every month, propagated from the anchor month.

use tracing::{debug, error};

use crate::config::AnchorConfig;
use crate::error::CalendarError;
use crate::types::{MonthDescriptor, MonthKind};

/// Date every month and number it relative to the anchor.
///
/// Returns the anchor's table position.
pub fn propagate(months: &mut [MonthDescriptor], anchor: &AnchorConfig) -> Result<usize, CalendarError> {
    let Some(pos) = months
        .iter()
        .rposition(|m| m.is(anchor.rabjung, anchor.year, anchor.month, MonthKind::Normal))
    else {
        error!(
            rabjung = anchor.rabjung,
            year = anchor.year,
            month = anchor.month,
            "anchor month not found"
        );
        return Err(CalendarError::AnchorNotFound);
    };

    let mut start = anchor.date;
    months[pos].start = Some(start);
    for i in pos + 1..months.len() {
        start = start.add_days(i64::from(months[i - 1].day_count()));
        months[i].start = Some(start);
    }

    start = anchor.date;
    for month in months[..pos].iter_mut().rev() {
        start = start.add_days(-i64::from(month.day_count()));
        month.start = Some(start);
    }

    for (i, month) in months.iter_mut().enumerate() {
        month.sequence = i as i64 - pos as i64;
    }
    debug!(position = pos, date = %anchor.date, "anchor placed");
    Ok(pos)
}
