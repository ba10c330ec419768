//! Observance days against a published practice calendar.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use phugpa_calendar::{CalendarConfig, DayKind, MonthKind, MonthTable};
use phugpa_practice::{
    DayRecord, IcalOptions, ObservanceType, day_record, day_records_for, month_records, render_ical,
};
use phugpa_time::CivilDate;

use ObservanceType::*;

fn table() -> &'static MonthTable {
    static TABLE: OnceLock<MonthTable> = OnceLock::new();
    TABLE.get_or_init(|| MonthTable::build(&CalendarConfig::default()).expect("default era builds"))
}

fn date(y: i32, m: u32, d: u32) -> CivilDate {
    CivilDate::new(y, m, d).expect("valid date")
}

fn record(y: i32, m: u32, d: u32) -> DayRecord {
    let day = date(y, m, d);
    let records = day_records_for(table(), day, day);
    assert_eq!(records.len(), 1, "one record for {day}");
    records.into_iter().next().expect("one record")
}

const TARA_MB_PRE: &[ObservanceType] = &[Tara, MedicineBuddha, EightPrecepts];
const MOON_PRE: &[ObservanceType] = &[LunarPhase, EightPrecepts];
const MOON_MB_PRE: &[ObservanceType] = &[LunarPhase, MedicineBuddha, EightPrecepts];
const TSOG: &[ObservanceType] = &[TsogOffering];
const PROT: &[ObservanceType] = &[ProtectorPuja];

/// Check every day of a month; days not listed have no observances.
fn check_month(y: i32, m: u32, expected: &[(u32, &[ObservanceType])]) {
    let (first, last) = CivilDate::month_bounds(y, m).expect("valid month");
    for d in first.day()..=last.day() {
        let want = expected
            .iter()
            .find(|(day, _)| *day == d)
            .map_or(&[][..], |(_, kinds)| *kinds);
        check_day(y, m, d, want);
    }
}

fn check_day(y: i32, m: u32, d: u32, expected: &[ObservanceType]) {
    let got: BTreeSet<_> = record(y, m, d).observances.iter().map(|o| o.kind).collect();
    let want: BTreeSet<_> = expected.iter().copied().collect();
    assert_eq!(got, want, "observances on {y}-{m:02}-{d:02}");
}

// ===== Reference months =====

#[test]
fn december_2008() {
    check_month(
        2008,
        12,
        &[
            (5, TARA_MB_PRE),
            (7, TSOG),
            (12, MOON_MB_PRE),
            (21, &[TsogOffering, Other]),
            (26, PROT),
            (27, MOON_PRE),
        ],
    );
}

#[test]
fn december_2010_with_doubled_month() {
    check_month(
        2010,
        12,
        &[
            (4, PROT),
            (5, MOON_PRE),
            (13, TARA_MB_PRE),
            (16, TSOG),
            (21, MOON_MB_PRE),
            (30, TSOG),
        ],
    );
}

#[test]
fn january_2011_second_of_double_month() {
    check_month(
        2011,
        1,
        &[
            (3, PROT),
            (4, MOON_PRE),
            (12, TARA_MB_PRE),
            (14, TSOG),
            (19, MOON_MB_PRE),
            (28, TSOG),
        ],
    );
}

#[test]
fn february_2011() {
    check_month(
        2011,
        2,
        &[
            (1, PROT),
            (2, MOON_PRE),
            (11, TARA_MB_PRE),
            (13, TSOG),
            (18, MOON_MB_PRE),
            (27, TSOG),
        ],
    );
}

#[test]
fn march_2011_new_year() {
    check_day(2011, 3, 2, &[]);
    check_day(2011, 3, 3, PROT);
    check_day(2011, 3, 4, MOON_PRE);
    check_day(2011, 3, 5, &[EightPrecepts, Other]);
    // Precepts through day 15, including both halves of a doubled day.
    check_day(2011, 3, 9, &[EightPrecepts]);
    check_day(2011, 3, 10, &[EightPrecepts]);
    check_day(2011, 3, 13, TARA_MB_PRE);
    check_day(2011, 3, 15, &[EightPrecepts, TsogOffering]);
    check_day(2011, 3, 18, &[EightPrecepts]);
    check_day(
        2011,
        3,
        19,
        &[EightPrecepts, BuddhaCommemoration, LunarPhase, MedicineBuddha],
    );
    check_day(2011, 3, 20, &[]);
    check_day(2011, 3, 29, TSOG);
}

// ===== Range queries =====

#[test]
fn month_equals_range() {
    let month = month_records(table(), 2020, 2).expect("valid month");
    let range = day_records_for(table(), date(2020, 2, 1), date(2020, 2, 29));
    assert_eq!(month.len(), 29);
    assert_eq!(month, range);
}

#[test]
fn invalid_month() {
    assert!(month_records(table(), 2020, 13).is_err());
}

#[test]
fn range_equals_single_days() {
    let from = date(2021, 12, 1);
    let to = date(2022, 1, 17);
    let range = day_records_for(table(), from, to);
    let single: Vec<_> = CivilDate::range_inclusive(from, to)
        .flat_map(|d| day_records_for(table(), d, d))
        .collect();
    assert_eq!(range.len(), 48);
    assert_eq!(range, single);
}

#[test]
fn empty_and_out_of_era_ranges() {
    assert!(day_records_for(table(), date(2020, 2, 2), date(2020, 2, 1)).is_empty());
    assert!(day_records_for(table(), date(1000, 1, 1), date(1000, 12, 31)).is_empty());
    assert!(day_record(table(), date(2300, 1, 1)).is_none());

    // Records stop where the era ends.
    let tail = day_records_for(table(), date(2227, 2, 10), date(2227, 3, 10));
    assert_eq!(tail.len(), 8);
    assert_eq!(tail.last().map(|r| r.date), Some(date(2227, 2, 17)));
}

// ===== Skipped and doubled days =====

#[test]
fn skipped_day_of_miracles_observed_day_before() {
    // Day 15 of the first month is skipped in 2008.
    let r = record(2008, 2, 20);
    assert_eq!(r.tibetan.day, 14);
    assert!(!r.tibetan.virtual_skipped);
    let kinds: Vec<_> = r.observances.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        [EightPrecepts, BuddhaCommemoration, LunarPhase, MedicineBuddha, EightPrecepts]
    );
    assert!(r.observances[0].description.starts_with("Day 14 of Tibetan month 1: "));
    let miracles = &r.observances[1];
    assert_eq!(miracles.name, "Day of Miracles");
    assert!(miracles.description.starts_with("Day 14 of Tibetan month 1: "));
    assert!(miracles.description.ends_with(
        "Normally this event would be on the 15th day of the Tibetan month but day 15 is \
         skipped this month, so it is observed on the previous date."
    ));
}

#[test]
fn skipped_eighth_day() {
    let r = record(2008, 3, 14);
    assert_eq!(r.tibetan.day, 7);
    let kinds: Vec<_> = r.observances.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, TARA_MB_PRE);
}

#[test]
fn doubled_day_observed_on_second_occurrence() {
    let first = record(2009, 1, 25);
    assert_eq!(first.tibetan.day, 30);
    assert_eq!(first.tibetan.day_kind, DayKind::FirstOfDouble);
    assert!(first.observances.is_empty());

    let second = record(2009, 1, 26);
    assert_eq!(second.tibetan.day_kind, DayKind::SecondOfDouble);
    let kinds: Vec<_> = second.observances.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, MOON_PRE);
    assert!(
        second.observances[0]
            .description
            .starts_with("Repeated day 30 of Tibetan month 11: ")
    );
}

#[test]
fn skipped_last_day_of_month() {
    // 17/9/10 skips days 6 and 30. The last solar day carries day 30.
    let r = record(1995, 12, 21);
    assert_eq!(r.tibetan.day, 30);
    assert_eq!(r.tibetan.day_kind, DayKind::Normal);
    let kinds: Vec<_> = r.observances.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, MOON_PRE);
    assert!(r.observances[0].description.starts_with("Day 30 of Tibetan month 10: "));

    check_day(1995, 12, 20, PROT);
    check_day(1995, 12, 22, &[]);
}

#[test]
fn doubled_day_followed_by_skipped_day() {
    // 17/4/7 doubles day 14 and skips 16; the labels jump from the
    // repeated 14 to 16, so the full moon falls on the repeated 14.
    check_day(1990, 9, 3, &[]);
    let r = record(1990, 9, 4);
    assert_eq!((r.tibetan.day, r.tibetan.day_kind), (14, DayKind::SecondOfDouble));
    let kinds: Vec<_> = r.observances.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, MOON_MB_PRE);
    for obs in &r.observances {
        assert!(obs.description.starts_with("Day 14 of Tibetan month 7: "));
        assert!(obs.description.ends_with(
            "Normally this event would be on the 15th day of the Tibetan month but day 15 is \
             skipped this month, so it is observed on the previous date."
        ));
    }
    check_day(1990, 9, 5, &[]);
}

#[test]
fn tsog_after_doubled_day() {
    // 17/18/3 doubles day 10: Tsog goes to the second occurrence.
    check_day(2004, 4, 29, &[]);
    check_day(2004, 4, 30, TSOG);

    // 17/19/3 doubles day 9 and skips 21; day 10 keeps its own solar day.
    let r = record(2005, 4, 19);
    assert_eq!((r.tibetan.day, r.tibetan.day_kind), (10, DayKind::Normal));
    let kinds: Vec<_> = r.observances.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, TSOG);
    check_day(2005, 4, 20, &[]);
}

#[test]
fn special_tsog_in_doubled_month() {
    let first = record(2010, 12, 30);
    assert_eq!(first.tibetan.month_kind, MonthKind::FirstOfDouble);
    let tsog = &first.observances[0];
    assert_eq!(tsog.name, "Tsog (Special Vajrayogini Tsog)");
    assert!(tsog.description.starts_with("Day 25 of Tibetan month 11: "));
    assert!(tsog.description.ends_with(
        "NOTE: During this year the 11th Tibetan month is doubled. It is not clear if the \
         special Tsog day is on this day or one lunar month later."
    ));

    let second = record(2011, 1, 28);
    assert_eq!(second.tibetan.month_kind, MonthKind::SecondOfDouble);
    let tsog = &second.observances[0];
    assert!(tsog.description.starts_with("Day 25 of repeated Tibetan month 11: "));
    assert!(tsog.description.ends_with("one lunar month earlier."));
}

#[test]
fn tsongkhapa_day() {
    let r = record(2008, 12, 21);
    let names: Vec<_> = r.observances.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Lama Tsongkhapa Day", "Tsog"]);
}

// ===== Serialization and export =====

#[test]
fn day_record_json() {
    let r = record(2011, 3, 5);
    let json = serde_json::to_value(&r).expect("serialize");
    assert_eq!(json["date"], "2011-03-05");
    assert_eq!(json["tibetan"]["month"], 1);
    assert_eq!(json["observances"][0]["kind"], "OTHER");
    let back: DayRecord = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, r);
}

#[test]
fn ical_selected_calendars() {
    let records = month_records(table(), 2008, 12).expect("valid month");
    let options = IcalOptions {
        url: Some("https://example.org/ical?calendars=TSOG".to_string()),
        ..IcalOptions::default()
    };
    let ics = render_ical(&records, &[TsogOffering], &options);

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert!(ics.contains("URL:https://example.org/ical?calendars=TSOG\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("UID:20081207_TSOG@phugpa.localhost\r\n"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20081221\r\nDTEND;VALUE=DATE:20081222\r\n"));
    assert!(ics.contains("CREATED:20080101T000000Z\r\n"));
    assert!(ics.contains("X-APPLE-CALENDAR-COLOR:#7a0000\r\nCOLOR:firebrick\r\n"));
    assert!(!ics.contains("_OTHER@"));
    // No bare line feeds.
    assert_eq!(ics.matches('\n').count(), ics.matches("\r\n").count());
}

#[test]
fn ical_all_calendars_and_folding() {
    let records = month_records(table(), 2008, 12).expect("valid month");
    let ics = render_ical(&records, &[], &IcalOptions::default());
    let events: usize = records.iter().map(|r| r.observances.len()).sum();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), events);
    assert!(!ics.contains("\r\nURL:"));
    assert!(ics.contains("\r\n\t "));
    for line in ics.split("\r\n") {
        if let Some(rest) = line.strip_prefix("\t ") {
            assert!(rest.chars().count() <= 55, "folded line too long: {rest}");
        }
    }
}
