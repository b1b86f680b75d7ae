use serde::Serialize;

/// Closed set of attendance event kinds. Anything read from storage that does
/// not map to one of these must be rejected at the boundary, never fed into
/// the reconstruction logic.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    ClockIn,
    BreakStart,
    BreakEnd,
    ClockOut,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "clock_in",
            EventKind::BreakStart => "break_start",
            EventKind::BreakEnd => "break_end",
            EventKind::ClockOut => "clock_out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(EventKind::ClockIn),
            "break_start" => Some(EventKind::BreakStart),
            "break_end" => Some(EventKind::BreakEnd),
            "clock_out" => Some(EventKind::ClockOut),
            _ => None,
        }
    }

    /// Helper: convert the action word used on the command line.
    /// Accepts both the short ("in", "out") and the long spelling.
    pub fn from_cli_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "clock-in" => Some(EventKind::ClockIn),
            "break-start" => Some(EventKind::BreakStart),
            "break-end" => Some(EventKind::BreakEnd),
            "out" | "clock-out" => Some(EventKind::ClockOut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "Clock In",
            EventKind::BreakStart => "Break Start",
            EventKind::BreakEnd => "Break End",
            EventKind::ClockOut => "Clock Out",
        }
    }

    /// Tie-break rank for events sharing the same timestamp.
    /// Processing order is ClockIn < BreakStart < BreakEnd < ClockOut so that
    /// totals do not depend on insertion order.
    pub fn sort_priority(&self) -> u8 {
        match self {
            EventKind::ClockIn => 0,
            EventKind::BreakStart => 1,
            EventKind::BreakEnd => 2,
            EventKind::ClockOut => 3,
        }
    }

    pub fn is_clock_in(&self) -> bool {
        matches!(self, EventKind::ClockIn)
    }
}
