//! Presence derivation: what a subject is doing right now, read off the
//! chronologically last active event of the current local day.

use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Presence {
    Working,
    OnBreak,
    ClockedOut,
    /// No events at all today.
    Off,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Working => "Working",
            Presence::OnBreak => "On break",
            Presence::ClockedOut => "Clocked out",
            Presence::Off => "Off",
        }
    }
}

/// Same ordering rules as the reconstruction: timestamp ascending, ties
/// broken by kind rank, so presence and worked totals never disagree on
/// which event is "last".
pub fn presence_now(events: &[AttendanceEvent], as_of: DateTime<Local>) -> Presence {
    let today = as_of.date_naive();

    let last = events
        .iter()
        .filter(|e| e.day() == today)
        .max_by_key(|e| (e.timestamp, e.kind.sort_priority()));

    match last.map(|e| e.kind) {
        Some(EventKind::ClockIn) | Some(EventKind::BreakEnd) => Presence::Working,
        Some(EventKind::BreakStart) => Presence::OnBreak,
        Some(EventKind::ClockOut) => Presence::ClockedOut,
        None => Presence::Off,
    }
}
