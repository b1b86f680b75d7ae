//! Time utilities: parsing timestamps from the CLI, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Parse a CLI timestamp. Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS`
/// or RFC 3339; naive values are taken as local time.
pub fn parse_datetime(s: &str) -> AppResult<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<DateTime<Local>>> {
    match input {
        Some(s) => Ok(Some(parse_datetime(s)?)),
        None => Ok(None),
    }
}
