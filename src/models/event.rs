use super::event_kind::EventKind;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// A single attendance event for one subject.
/// Events are immutable once recorded; corrections go through the entry edit
/// path, which rewrites `timestamp` and keeps the original in
/// `original_timestamp`, and voiding flips `is_active` off.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub id: i64,
    pub subject_id: i64,
    pub timestamp: DateTime<Local>,
    pub kind: EventKind,
    pub is_active: bool,
    pub work_center: Option<String>,
    pub change_marker: Option<String>,
    pub original_timestamp: Option<DateTime<Local>>,
    pub source: String,
    pub created_at: String,
}

impl AttendanceEvent {
    /// High-level constructor for events created from the CLI.
    /// `id` is 0 until the row is inserted.
    pub fn new(
        subject_id: i64,
        timestamp: DateTime<Local>,
        kind: EventKind,
        work_center: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            subject_id,
            timestamp,
            kind,
            is_active: true,
            work_center,
            change_marker: None,
            original_timestamp: None,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Local calendar date of the event, the bucket key for reconstruction.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn center_label(&self) -> &str {
        self.work_center.as_deref().unwrap_or("Unspecified")
    }

    pub fn is_edited(&self) -> bool {
        self.change_marker.is_some()
    }
}
