mod common;

use chrono::Datelike;
use pennywise_core::{resolve_date_range, resolve_date_range_key, DatePreset, DateRange, PennyError};

use common::{at, date};

#[test]
fn presets_resolve_against_an_anchor() {
    assert_eq!(
        resolve_date_range(DatePreset::ThisMonth, Some(at(2024, 2, 15))),
        DateRange::Bounded {
            start: date(2024, 2, 1),
            end: date(2024, 2, 29)
        }
    );
    assert_eq!(
        resolve_date_range(DatePreset::LastMonth, Some(at(2024, 1, 10))),
        DateRange::Bounded {
            start: date(2023, 12, 1),
            end: date(2023, 12, 31)
        }
    );
    assert_eq!(
        resolve_date_range(DatePreset::Last3Months, Some(at(2024, 3, 20))),
        DateRange::Bounded {
            start: date(2024, 1, 1),
            end: date(2024, 3, 31)
        }
    );
    assert!(resolve_date_range(DatePreset::All, Some(at(1999, 12, 31))).is_unbounded());
}

#[test]
fn every_day_of_a_leap_year_maps_to_its_month() {
    let mut day = date(2024, 1, 1);
    while day <= date(2024, 12, 31) {
        let now = day.and_hms_opt(0, 0, 0).expect("midnight");
        let range = resolve_date_range(DatePreset::ThisMonth, Some(now));
        assert!(range.contains(day), "{day}");
        let start = range.start().expect("bounded");
        let end = range.end().expect("bounded");
        assert_eq!(start, date(day.year(), day.month(), 1));
        assert!(!range.contains(end.succ_opt().expect("next")));
        day = day.succ_opt().expect("next day");
    }
}

#[test]
fn omitted_anchor_uses_the_wall_clock() {
    let range = resolve_date_range(DatePreset::Last3Months, None);
    let start = range.start().expect("bounded");
    let end = range.end().expect("bounded");
    assert_eq!(start.day(), 1);
    assert!(start < end);
    assert!(resolve_date_range(DatePreset::All, None).is_unbounded());
}

#[test]
fn preset_keys_are_parsed() {
    let range = resolve_date_range_key("lastMonth", Some(at(2024, 3, 3))).expect("known key");
    assert_eq!(range.start(), Some(date(2024, 2, 1)));
    assert_eq!(range.end(), Some(date(2024, 2, 29)));

    let err = resolve_date_range_key("fortnight", None).unwrap_err();
    assert!(matches!(err, PennyError::InvalidInput(_)));
}
