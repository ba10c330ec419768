//! Golden ephemeris values for known months.
//!
//! Month index 753 starts on 1988-02-18 (Thursday), index 1010 is the
//! tenth month of 2008 with a skipped 23rd and a doubled 26th.

use phugpa_math::{MonthRoots, corrected_day, root_anomaly, root_sun, root_weekday, true_weekday};

fn weekdays(index: i64) -> Vec<i64> {
    let roots = MonthRoots::new(index);
    (1..=30)
        .map(|d| corrected_day(&roots, d).expect("ephemeris").weekday_number())
        .collect()
}

#[test]
fn roots_of_anchor_month() {
    assert_eq!(root_weekday(753), [4, 29, 48, 3, 183]);
    assert_eq!(root_sun(753), [21, 49, 42, 0, 36]);
    assert_eq!(root_anomaly(753), [13, 100]);
}

#[test]
fn roots_at_era_bounds() {
    assert_eq!(root_weekday(-11134), [3, 24, 33, 2, 620]);
    assert_eq!(root_sun(-11134), [21, 27, 32, 1, 29]);
    assert_eq!(root_anomaly(-11134), [1, 57]);
    assert_eq!(root_weekday(3708), [5, 22, 52, 5, 341]);
    assert_eq!(root_sun(3708), [19, 6, 29, 3, 21]);
    assert_eq!(root_anomaly(3708), [11, 31]);
}

#[test]
fn anchor_month_runs_without_gaps() {
    let wd = weekdays(753);
    // 0 = Saturday, so the first day is a Thursday.
    assert_eq!(wd[0], 5);
    for pair in wd.windows(2) {
        assert_eq!((pair[0] + 1) % 7, pair[1]);
    }
}

#[test]
fn skip_and_double_in_tenth_month_2008() {
    assert_eq!(true_weekday(1009, 30).expect("ephemeris"), 5);
    let wd = weekdays(1010);
    assert_eq!(
        wd,
        vec![
            6, 0, 1, 2, 3, 4, 5, 6, 0, 1, 2, 3, 4, 5, 6, 0, 1, 2, 3, 4, 5, 6, 6, 0, 1, 3, 4, 5,
            6, 0
        ]
    );
}

#[test]
fn full_digits_of_corrected_days() {
    let roots = MonthRoots::new(1010);
    let d23 = corrected_day(&roots, 23).expect("ephemeris");
    assert_eq!(d23.weekday, [6, 58, 7, 4, 18, 264]);
    assert_eq!(d23.sun, [17, 22, 32, 0, 36]);
    let d26 = corrected_day(&roots, 26).expect("ephemeris");
    assert_eq!(d26.weekday, [3, 1, 2, 0, 3, 583]);
    assert_eq!(d26.sun, [17, 36, 1, 1, 11]);
}

#[test]
fn first_month_of_era() {
    let wd = weekdays(-11134);
    assert_eq!(&wd[13..16], &[3, 4, 4]);
    assert_eq!(&wd[23..25], &[5, 0]);
}
