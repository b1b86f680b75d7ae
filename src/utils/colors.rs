//! ANSI color helper utilities for terminal output.

use crate::core::presence::Presence;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Presence color: working → green, break → yellow, out → red, off → grey.
pub fn color_for_presence(p: Presence) -> &'static str {
    match p {
        Presence::Working => GREEN,
        Presence::OnBreak => YELLOW,
        Presence::ClockedOut => RED,
        Presence::Off => GREY,
    }
}

/// GREY for voided rows so they read as struck from the record.
pub fn color_for_active(is_active: bool) -> &'static str {
    if is_active { RESET } else { GREY }
}
