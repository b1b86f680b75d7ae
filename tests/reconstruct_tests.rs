//! Tests for the worked-time reconstruction over attendance events.

use attendlog::core::reconstruct::compute_worked_time;
use attendlog::models::event::AttendanceEvent;
use attendlog::models::event_kind::EventKind;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

fn ts(date: &str, time: &str) -> DateTime<Local> {
    let naive =
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap();
    Local.from_local_datetime(&naive).single().unwrap()
}

fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

fn ev(date: &str, time: &str, kind: EventKind) -> AttendanceEvent {
    AttendanceEvent::new(1, ts(date, time), kind, None)
}

#[test]
fn empty_input_yields_zero() {
    let worked = compute_worked_time(&[], ts("2025-06-10", "12:00"));
    assert_eq!(worked.total_minutes(), 0);
    assert!(worked.per_day.is_empty());
}

#[test]
fn plain_shift_counts_full_span() {
    // ClockIn@09:00, ClockOut@17:00 -> 8h
    let events = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "17:00", EventKind::ClockOut),
    ];
    let worked = compute_worked_time(&events, ts("2025-06-11", "12:00"));
    assert_eq!(worked.total_minutes(), 8 * 60);
    assert_eq!(worked.minutes_on(day("2025-06-10")), 8 * 60);
}

#[test]
fn break_is_not_counted() {
    // 09:00-13:00 plus 14:00-18:00 -> 8h
    let events = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "13:00", EventKind::BreakStart),
        ev("2025-06-10", "14:00", EventKind::BreakEnd),
        ev("2025-06-10", "18:00", EventKind::ClockOut),
    ];
    let worked = compute_worked_time(&events, ts("2025-06-11", "12:00"));
    assert_eq!(worked.total_minutes(), 8 * 60);
}

#[test]
fn open_session_today_extends_to_as_of() {
    let events = vec![ev("2025-06-10", "09:00", EventKind::ClockIn)];
    let worked = compute_worked_time(&events, ts("2025-06-10", "11:00"));
    assert_eq!(worked.total_minutes(), 2 * 60);
}

#[test]
fn open_session_on_past_day_is_not_extended() {
    let events = vec![ev("2025-06-10", "09:00", EventKind::ClockIn)];
    let worked = compute_worked_time(&events, ts("2025-06-11", "11:00"));
    assert_eq!(worked.total_minutes(), 0);
    assert_eq!(worked.minutes_on(day("2025-06-10")), 0);
}

#[test]
fn repeated_clock_in_last_wins() {
    let events = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "09:30", EventKind::ClockIn),
        ev("2025-06-10", "17:00", EventKind::ClockOut),
    ];
    let worked = compute_worked_time(&events, ts("2025-06-11", "12:00"));
    assert_eq!(worked.total_minutes(), 7 * 60 + 30);
}

#[test]
fn unmatched_closers_are_silent_noops() {
    // Hand-edited records: an orphan break-start and clock-out before any
    // clock-in must not derail the rest of the day.
    let events = vec![
        ev("2025-06-10", "08:00", EventKind::BreakStart),
        ev("2025-06-10", "08:30", EventKind::ClockOut),
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "10:00", EventKind::ClockOut),
    ];
    let worked = compute_worked_time(&events, ts("2025-06-11", "12:00"));
    assert_eq!(worked.total_minutes(), 60);
}

#[test]
fn unsorted_input_gives_same_result() {
    let sorted = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "13:00", EventKind::BreakStart),
        ev("2025-06-10", "14:00", EventKind::BreakEnd),
        ev("2025-06-10", "18:00", EventKind::ClockOut),
    ];
    let mut shuffled = sorted.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    let as_of = ts("2025-06-11", "12:00");
    assert_eq!(
        compute_worked_time(&sorted, as_of).total_minutes(),
        compute_worked_time(&shuffled, as_of).total_minutes(),
    );
}

#[test]
fn equal_timestamps_resolve_by_kind_rank() {
    // BreakStart and BreakEnd share a timestamp: the fixed rank processes
    // BreakStart first (closing 09:00-12:00), then BreakEnd reopens, so the
    // afternoon still counts. Input order must not matter.
    let a = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "12:00", EventKind::BreakStart),
        ev("2025-06-10", "12:00", EventKind::BreakEnd),
        ev("2025-06-10", "17:00", EventKind::ClockOut),
    ];
    let mut b = a.clone();
    b.swap(1, 2);

    let as_of = ts("2025-06-11", "12:00");
    let wa = compute_worked_time(&a, as_of);
    let wb = compute_worked_time(&b, as_of);

    assert_eq!(wa.total_minutes(), 8 * 60);
    assert_eq!(wa.total_minutes(), wb.total_minutes());
}

#[test]
fn days_accumulate_independently() {
    let day1 = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "17:00", EventKind::ClockOut),
    ];
    let day2 = vec![
        ev("2025-06-11", "10:00", EventKind::ClockIn),
        ev("2025-06-11", "12:00", EventKind::ClockOut),
    ];
    let mut combined = day1.clone();
    combined.extend(day2.clone());

    let as_of = ts("2025-06-12", "12:00");
    let whole = compute_worked_time(&combined, as_of);

    assert_eq!(
        whole.total_minutes(),
        compute_worked_time(&day1, as_of).total_minutes()
            + compute_worked_time(&day2, as_of).total_minutes()
    );
    assert_eq!(whole.minutes_on(day("2025-06-10")), 8 * 60);
    assert_eq!(whole.minutes_on(day("2025-06-11")), 2 * 60);
}

#[test]
fn on_break_session_is_not_extended_to_as_of() {
    let events = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "10:00", EventKind::BreakStart),
    ];
    let worked = compute_worked_time(&events, ts("2025-06-10", "12:00"));
    assert_eq!(worked.total_minutes(), 60);
}

#[test]
fn break_end_resumes_counting_until_as_of() {
    let events = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "10:00", EventKind::BreakStart),
        ev("2025-06-10", "10:30", EventKind::BreakEnd),
    ];
    let worked = compute_worked_time(&events, ts("2025-06-10", "12:00"));
    // 09:00-10:00 plus 10:30-12:00
    assert_eq!(worked.total_minutes(), 60 + 90);
}

#[test]
fn as_of_before_open_start_never_goes_negative() {
    let events = vec![ev("2025-06-10", "09:00", EventKind::ClockIn)];
    let worked = compute_worked_time(&events, ts("2025-06-10", "08:00"));
    assert_eq!(worked.total_minutes(), 0);
}

#[test]
fn same_input_same_result() {
    let events = vec![
        ev("2025-06-10", "09:00", EventKind::ClockIn),
        ev("2025-06-10", "17:00", EventKind::ClockOut),
    ];
    let as_of = ts("2025-06-10", "18:00");
    let first = compute_worked_time(&events, as_of);
    let second = compute_worked_time(&events, as_of);
    assert_eq!(first.total_minutes(), second.total_minutes());
    assert_eq!(first.per_day, second.per_day);
}
