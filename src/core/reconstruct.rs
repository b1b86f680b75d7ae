//! Worked-time reconstruction.
//!
//! Takes the raw attendance events of one subject and rebuilds the elapsed
//! "on the clock" time from them, one calendar day at a time. The input may
//! arrive in any order and may contain malformed sequences (hand-edited
//! records, missing clock-outs); reconstruction is best-effort and never
//! fails. Pure: no I/O, no wall-clock reads, `as_of` is the only notion of
//! "now".

use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use crate::models::worked_time::WorkedTime;
use chrono::{DateTime, Duration, Local, NaiveDate};
use std::collections::BTreeMap;

/// Compute the total worked duration plus the per-day breakdown.
///
/// Caller contract: `events` should already be filtered to one subject and to
/// `is_active` rows (the query layer does this in SQL). Foreign rows are not
/// rejected here; whatever is passed in gets counted.
///
/// Per day bucket (subject-local calendar date):
/// - events are sorted by timestamp, ties broken by kind rank so equal
///   timestamps always process as ClockIn, BreakStart, BreakEnd, ClockOut;
/// - ClockIn opens a counted interval (a repeated ClockIn overwrites the
///   stale start, last one wins);
/// - BreakStart and ClockOut close it and accumulate; a close with no open
///   interval is a silent no-op;
/// - BreakEnd reopens counting from its own timestamp.
///
/// Only the bucket containing `as_of`'s local date gets its trailing open
/// interval extended to `as_of`, and only when the subject is not on break.
/// An unterminated session on a past day contributes nothing beyond its last
/// recorded event.
pub fn compute_worked_time(events: &[AttendanceEvent], as_of: DateTime<Local>) -> WorkedTime {
    let mut buckets: BTreeMap<NaiveDate, Vec<&AttendanceEvent>> = BTreeMap::new();
    for ev in events {
        buckets.entry(ev.day()).or_default().push(ev);
    }

    let today = as_of.date_naive();
    let mut per_day = BTreeMap::new();
    let mut total = Duration::zero();

    for (day, mut bucket) in buckets {
        bucket.sort_by_key(|e| (e.timestamp, e.kind.sort_priority()));

        let mut day_total = Duration::zero();
        let mut open_start: Option<DateTime<Local>> = None;
        let mut on_break = false;

        for ev in bucket {
            match ev.kind {
                EventKind::ClockIn => {
                    open_start = Some(ev.timestamp);
                }
                EventKind::BreakStart => {
                    if let Some(start) = open_start.take() {
                        day_total += ev.timestamp - start;
                    }
                    on_break = true;
                }
                EventKind::BreakEnd => {
                    on_break = false;
                    open_start = Some(ev.timestamp);
                }
                EventKind::ClockOut => {
                    if let Some(start) = open_start.take() {
                        day_total += ev.timestamp - start;
                    }
                }
            }
        }

        // Still on the clock right now: count up to as_of, today only.
        if day == today
            && !on_break
            && let Some(start) = open_start
            && as_of > start
        {
            day_total += as_of - start;
        }

        total += day_total;
        per_day.insert(day, day_total);
    }

    WorkedTime { total, per_day }
}
