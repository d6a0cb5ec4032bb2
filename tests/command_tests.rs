use chrono::{TimeZone, Utc};

use taskpad::commands::parse_due_date;
use taskpad::models::{Priority, SortKey, StatusFilter, TaskFilter};

#[test]
fn due_date_parses_iso_dates_to_utc_midnight() {
    let parsed = parse_due_date(Some("2025-12-01"));
    assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()));
}

#[test]
fn malformed_due_dates_mean_no_due_date() {
    for raw in ["tomorrow", "2025-13-01", "01/12/2025", ""] {
        assert_eq!(parse_due_date(Some(raw)), None, "input {raw:?}");
    }
    assert_eq!(parse_due_date(None), None);
}

#[test]
fn priority_ordinals_round_trip() {
    assert_eq!(Priority::from(0u8), Priority::Low);
    assert_eq!(Priority::from(1u8), Priority::Medium);
    assert_eq!(Priority::from(2u8), Priority::High);
    assert_eq!(Priority::High.ordinal(), 2);

    // Out-of-range values settle on the middle priority.
    assert_eq!(Priority::from(7u8), Priority::Medium);
}

#[test]
fn priorities_order_by_urgency() {
    assert!(Priority::High > Priority::Medium);
    assert!(Priority::Medium > Priority::Low);
}

#[test]
fn filter_strings_fall_back_to_defaults() {
    let filter = TaskFilter::new("completed", "priority");
    assert_eq!(filter.status, StatusFilter::Completed);
    assert_eq!(filter.sort_by, SortKey::Priority);

    let fallback = TaskFilter::new("whatever", "whatever");
    assert_eq!(fallback.status, StatusFilter::All);
    assert_eq!(fallback.sort_by, SortKey::CreatedAt);

    let empty = TaskFilter::new("", "");
    assert_eq!(empty.status, StatusFilter::All);
    assert_eq!(empty.sort_by, SortKey::CreatedAt);
}
