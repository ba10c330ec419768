//! Month classification over the era and the built [`MonthTable`].

use std::collections::HashMap;

use phugpa_time::CivilDate;
use tracing::{debug, debug_span, error, info};

use crate::anchor;
use crate::annotate;
use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::types::{MonthDescriptor, MonthKind};

/// Corrected month count and intercalation remainder (0..65) for a month.
///
/// `total_years` is the 1-based year count from year 1 of rabjung 1. The
/// count is zero for the month labelled 2 of year 1 of rabjung 16 and
/// negative before it.
pub fn month_count(total_years: i64, month: u32) -> (i64, i64) {
    let (m, y) = if month > 2 {
        (i64::from(month), total_years - 901)
    } else {
        (i64::from(month) + 12, total_years - 902)
    };
    let mean = 12 * y + m - 3;
    let v = 2 * mean + 55;
    (mean + v.div_euclid(65), v.rem_euclid(65))
}

fn preceding(rabjung: i32, year: u32, month: u32) -> (i32, u32, u32) {
    if month > 1 {
        (rabjung, year, month - 1)
    } else if year > 1 {
        (rabjung, year - 1, 12)
    } else {
        (rabjung - 1, 60, 12)
    }
}

/// Classify every mean month of the era into table months, in order.
///
/// The remainder partitions as follows: 2-47 a normal month, 48-49 the first
/// of a double month, 50-51 the second of a double month labelled with the
/// preceding month number, 52-64 a normal month labelled with the preceding
/// number, 0-1 an extra preceding month inserted before this one.
pub fn classify(config: &CalendarConfig) -> Vec<MonthDescriptor> {
    let cycles = (config.last_rabjung - config.first_rabjung + 1).max(0) as usize;
    let mut months = Vec::with_capacity(cycles * 60 * 13);

    for rabjung in config.first_rabjung..=config.last_rabjung {
        for year in 1..=60u32 {
            let total_years = i64::from(rabjung - 1) * 60 + i64::from(year);
            for month in 1..=12u32 {
                let (index, rem) = month_count(total_years, month);
                let (pr, py, pm) = preceding(rabjung, year, month);
                match rem {
                    0 | 1 => {
                        months.push(MonthDescriptor::new(pr, py, pm, MonthKind::Normal, index - 1));
                        months.push(MonthDescriptor::new(rabjung, year, month, MonthKind::Normal, index));
                    }
                    2..=47 => {
                        months.push(MonthDescriptor::new(rabjung, year, month, MonthKind::Normal, index));
                    }
                    48 | 49 => months.push(MonthDescriptor::new(
                        rabjung,
                        year,
                        month,
                        MonthKind::FirstOfDouble,
                        index,
                    )),
                    50 | 51 => months.push(MonthDescriptor::new(
                        pr,
                        py,
                        pm,
                        MonthKind::SecondOfDouble,
                        index,
                    )),
                    _ => months.push(MonthDescriptor::new(pr, py, pm, MonthKind::Normal, index)),
                }
            }
        }
    }
    months
}

fn check_sequence(months: &[MonthDescriptor]) -> Result<(), CalendarError> {
    for pair in months.windows(2) {
        if pair[1].index != pair[0].index + 1 {
            error!(index = pair[0].index, next = pair[1].index, "month index gap");
            return Err(CalendarError::SequenceGap {
                index: pair[0].index,
            });
        }
    }
    Ok(())
}

type MonthKey = (i32, u32, u32, MonthKind);

/// The immutable, fully annotated and dated month table of one era.
#[derive(Debug, Clone)]
pub struct MonthTable {
    config: CalendarConfig,
    months: Vec<MonthDescriptor>,
    positions: HashMap<MonthKey, usize>,
    anchor: usize,
}

impl MonthTable {
    /// Classify, annotate and date every month of the configured era.
    pub fn build(config: &CalendarConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        let _span = debug_span!(
            "month_table",
            first = config.first_rabjung,
            last = config.last_rabjung
        )
        .entered();

        let mut months = {
            let _s = debug_span!("classify").entered();
            classify(config)
        };
        debug!(months = months.len(), "months classified");
        check_sequence(&months)?;

        {
            let _s = debug_span!("annotate").entered();
            annotate::annotate(&mut months)?;
        }
        let anchor = {
            let _s = debug_span!("propagate").entered();
            anchor::propagate(&mut months, &config.anchor)?
        };

        // Later entries overwrite earlier ones, so lookups see the latest.
        let positions = months
            .iter()
            .enumerate()
            .map(|(i, m)| ((m.rabjung, m.year, m.month, m.kind), i))
            .collect();

        info!(
            months = months.len(),
            first = config.first_rabjung,
            last = config.last_rabjung,
            "month table built"
        );
        Ok(Self {
            config: *config,
            months,
            positions,
            anchor,
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// All months in chronological order.
    pub fn months(&self) -> &[MonthDescriptor] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn anchor_month(&self) -> &MonthDescriptor {
        &self.months[self.anchor]
    }

    /// Table position of a month; the latest entry when a key repeats.
    pub fn position(&self, rabjung: i32, year: u32, month: u32, kind: MonthKind) -> Option<usize> {
        self.positions.get(&(rabjung, year, month, kind)).copied()
    }

    pub fn find(
        &self,
        rabjung: i32,
        year: u32,
        month: u32,
        kind: MonthKind,
    ) -> Option<&MonthDescriptor> {
        self.position(rabjung, year, month, kind)
            .map(|i| &self.months[i])
    }

    /// Solar date of the first day of the era.
    pub fn first_date(&self) -> Option<CivilDate> {
        self.months.first().and_then(|m| m.start)
    }

    /// First solar date after the era.
    pub fn end_date(&self) -> Option<CivilDate> {
        self.months.last().and_then(|m| m.end())
    }

    /// The month whose solar span contains `date`.
    pub fn month_containing(&self, date: CivilDate) -> Option<&MonthDescriptor> {
        if self.end_date().is_none_or(|end| date >= end) {
            return None;
        }
        let after = self
            .months
            .partition_point(|m| m.start.is_some_and(|s| s <= date));
        after.checked_sub(1).map(|i| &self.months[i])
    }
}
