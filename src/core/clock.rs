//! Guard logic for live clock actions.

use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use chrono::{DateTime, Local};

/// A break or clock-out only makes sense after a clock-in on the same local
/// day. A clock-in itself is always accepted; the reconstruction tolerates a
/// repeated one (last wins).
pub fn ensure_can_record(
    subject_id: i64,
    kind: EventKind,
    todays_events: &[AttendanceEvent],
    at: DateTime<Local>,
) -> AppResult<()> {
    if kind.is_clock_in() {
        return Ok(());
    }

    let day = at.date_naive();
    let clocked_in = todays_events
        .iter()
        .any(|e| e.kind.is_clock_in() && e.day() == day);

    if clocked_in {
        Ok(())
    } else {
        Err(AppError::NotClockedIn(subject_id))
    }
}
