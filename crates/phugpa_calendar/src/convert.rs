//! Solar ⇄ Tibetan date conversion against a built [`MonthTable`].

use phugpa_time::CivilDate;
use serde::{Deserialize, Serialize};

use crate::month_table::MonthTable;
use crate::types::{DayKind, MonthDescriptor, TibetanDate};

/// Lunar day occupying solar day `offset` (0-based) of `month`.
///
/// The day number starts at `offset + 1` and moves up once per skipped day
/// it reaches, then down once per doubled day below it. Landing on a doubled
/// day marks its first occurrence; stepping down onto one marks the second.
/// In a month where a doubled day precedes a skipped day the labels between
/// the two are shifted by one.
fn day_at(month: &MonthDescriptor, offset: u32) -> Option<(u32, DayKind)> {
    if offset >= month.day_count() {
        return None;
    }
    let mut day = offset + 1;
    for skip in month.skips {
        if skip != 0 && day >= skip {
            day += 1;
        }
    }

    let mut kind = if month.is_doubled(day) {
        DayKind::FirstOfDouble
    } else {
        DayKind::Normal
    };
    for double in month.doubles {
        if double != 0 && day > double {
            day -= 1;
            if day == double {
                kind = DayKind::SecondOfDouble;
            }
        }
    }
    Some((day, kind))
}

/// Tibetan date of a solar date, `None` outside the era.
///
/// Outside months where a doubled day precedes a skipped day this inverts
/// [`solar_dates_for`].
pub fn tibetan_date_for(table: &MonthTable, date: CivilDate) -> Option<TibetanDate> {
    let month = table.month_containing(date)?;
    let start = month.start?;
    let offset = u32::try_from(date.days_since(&start)).ok()?;
    let (day, day_kind) = day_at(month, offset)?;

    let mut tib = TibetanDate::new(month.rabjung, month.year, month.month, month.kind, day);
    tib.day_kind = day_kind;
    Some(tib)
}

/// Partial Tibetan date; `None` fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TibetanQuery {
    pub rabjung: Option<i32>,
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl TibetanQuery {
    pub fn exact(rabjung: i32, year: u32, month: u32, day: u32) -> Self {
        Self {
            rabjung: Some(rabjung),
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    fn matches(&self, m: &MonthDescriptor) -> bool {
        self.rabjung.is_none_or(|r| r == m.rabjung)
            && self.year.is_none_or(|y| y == m.year)
            && self.month.is_none_or(|mo| mo == m.month)
    }

    fn days(&self) -> std::ops::RangeInclusive<u32> {
        match self.day {
            Some(d) if (1..=30).contains(&d) => d..=d,
            Some(_) => 1..=0,
            None => 1..=30,
        }
    }
}

/// A Tibetan date and its solar date; `solar` is `None` for a skipped day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePair {
    pub tibetan: TibetanDate,
    pub solar: Option<CivilDate>,
}

fn push_day(out: &mut Vec<DatePair>, month: &MonthDescriptor, start: CivilDate, day: u32) {
    let tib = TibetanDate::new(month.rabjung, month.year, month.month, month.kind, day);

    if month.is_skipped(day) {
        out.push(DatePair {
            tibetan: TibetanDate {
                virtual_skipped: true,
                ..tib
            },
            solar: None,
        });
        return;
    }

    let mut offset = i64::from(day) - 1;
    for skip in month.skips {
        if skip != 0 && day > skip {
            offset -= 1;
        }
    }
    for double in month.doubles {
        if double != 0 && day > double {
            offset += 1;
        }
    }
    let date = start.add_days(offset);

    if month.is_doubled(day) {
        out.push(DatePair {
            tibetan: TibetanDate {
                day_kind: DayKind::FirstOfDouble,
                ..tib
            },
            solar: Some(date),
        });
        out.push(DatePair {
            tibetan: TibetanDate {
                day_kind: DayKind::SecondOfDouble,
                ..tib
            },
            solar: Some(date.succ()),
        });
    } else {
        out.push(DatePair {
            tibetan: tib,
            solar: Some(date),
        });
    }
}

/// Every solar date matching a partial Tibetan date.
///
/// A skipped day yields one pair without a solar date and a doubled day
/// yields two pairs on consecutive solar days. When a month key occurs more
/// than once in the table only its latest entry is used. Pairs come out in
/// table order.
pub fn solar_dates_for(table: &MonthTable, query: &TibetanQuery) -> Vec<DatePair> {
    let mut out = Vec::new();
    for (i, month) in table.months().iter().enumerate() {
        if !query.matches(month)
            || table.position(month.rabjung, month.year, month.month, month.kind) != Some(i)
        {
            continue;
        }
        let Some(start) = month.start else {
            continue;
        };
        for day in query.days() {
            push_day(&mut out, month, start, day);
        }
    }
    out
}
