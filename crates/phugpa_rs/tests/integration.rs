//! Integration tests for phugpa_rs against the shared default table.

use phugpa_rs::*;

fn date(s: &str) -> CivilDate {
    s.parse().expect("valid date")
}

#[test]
fn table_is_built_on_first_use() {
    let t = table().expect("default table");
    assert!(is_initialized());
    assert_eq!(t.len(), 14_843);
    assert!(std::ptr::eq(t, table().expect("same table")));
}

#[test]
fn init_after_first_use_is_rejected() {
    table().expect("default table");
    assert_eq!(
        init(&CalendarConfig::default()),
        Err(PhugpaError::AlreadyInitialized)
    );
}

#[test]
fn solar_to_tibetan() {
    let t = tibetan_date_for(date("2011-03-05"))
        .expect("table")
        .expect("inside era");
    assert_eq!((t.rabjung, t.year, t.month, t.day), (17, 25, 1, 1));
    assert_eq!(tibetan_date_for(date("1900-01-01")), Ok(None));
}

#[test]
fn tibetan_to_solar() {
    let pairs = solar_dates_for(TibetanQuery::exact(17, 22, 10, 25)).expect("table");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].solar, Some(date("2008-12-21")));
}

#[test]
fn records() {
    let month = month_records(2008, 12).expect("valid month");
    let range = day_records_for(date("2008-12-01"), date("2008-12-31")).expect("table");
    assert_eq!(month, range);
    assert_eq!(month.len(), 31);
    assert!(matches!(month_records(2008, 0), Err(PhugpaError::Time(_))));
}

#[test]
fn calendar_registry() {
    assert_eq!(calendars().len(), ObservanceType::ALL.len());
    assert_eq!(calendars()[0].title, "Buddha Days");
}
