use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period expression into an inclusive date range.
///
/// Accepted forms: `YYYY-MM-DD` (one day), `YYYY-MM` (one month), `YYYY`
/// (one year), `A:B` (range between two of the above), `all`.
/// `None` defaults to the current month.
pub fn resolve_period(period: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some(p) = period else {
        let t = today();
        return Ok(month_bounds(t.year(), t.month()));
    };

    if p == "all" {
        // Wide open; the query layer treats it as "no date filter".
        let start = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        return Ok((start, end));
    }

    if let Some((a, b)) = p.split_once(':') {
        let (s, _) = bounds_of(a)?;
        let (_, e) = bounds_of(b)?;
        if e < s {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }
        return Ok((s, e));
    }

    bounds_of(p)
}

/// Bounds of a single period token.
fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        return Ok(month_bounds(first.year(), first.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let s = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
        let e = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
        return Ok((s, e));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    (first, next.pred_opt().unwrap())
}
