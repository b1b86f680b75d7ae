//! Tests for the presence derivation.

use attendlog::core::presence::{Presence, presence_now};
use attendlog::models::event::AttendanceEvent;
use attendlog::models::event_kind::EventKind;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

fn ts(date: &str, time: &str) -> DateTime<Local> {
    let naive =
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap();
    Local.from_local_datetime(&naive).single().unwrap()
}

fn ev(date: &str, time: &str, kind: EventKind) -> AttendanceEvent {
    AttendanceEvent::new(1, ts(date, time), kind, None)
}

#[test]
fn no_events_means_off() {
    assert_eq!(presence_now(&[], ts("2025-06-10", "12:00")), Presence::Off);
}

#[test]
fn yesterdays_events_do_not_count() {
    let events = vec![ev("2025-06-09", "09:00", EventKind::ClockIn)];
    assert_eq!(
        presence_now(&events, ts("2025-06-10", "12:00")),
        Presence::Off
    );
}

#[test]
fn last_event_decides() {
    let mut events = vec![ev("2025-06-10", "09:00", EventKind::ClockIn)];
    assert_eq!(
        presence_now(&events, ts("2025-06-10", "12:00")),
        Presence::Working
    );

    events.push(ev("2025-06-10", "10:00", EventKind::BreakStart));
    assert_eq!(
        presence_now(&events, ts("2025-06-10", "12:00")),
        Presence::OnBreak
    );

    events.push(ev("2025-06-10", "10:30", EventKind::BreakEnd));
    assert_eq!(
        presence_now(&events, ts("2025-06-10", "12:00")),
        Presence::Working
    );

    events.push(ev("2025-06-10", "17:00", EventKind::ClockOut));
    assert_eq!(
        presence_now(&events, ts("2025-06-10", "12:00")),
        Presence::ClockedOut
    );
}
