use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use crate::models::holiday::Holiday;
use crate::models::request::{PlannerRequest, RequestKind, RequestStatus};
use crate::models::subject::Subject;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_ts(s: &str) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_err(AppError::InvalidDateTime(s.to_string())))
}

fn parse_day(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(s.to_string())))
}

/// Map a `time_entries` row. An unrecognized `kind` string means the store
/// was written by something newer or got corrupted; fail fast instead of
/// silently skewing every total computed from it.
pub fn map_event_row(row: &Row) -> Result<AttendanceEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_ts(&ts_str)?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_err(AppError::InvalidEventKind(kind_str.clone())))?;

    let original_timestamp = match row.get::<_, Option<String>>("original_timestamp")? {
        Some(s) => Some(parse_ts(&s)?),
        None => None,
    };

    Ok(AttendanceEvent {
        id: row.get("id")?,
        subject_id: row.get("subject_id")?,
        timestamp,
        kind,
        is_active: row.get::<_, i64>("is_active")? == 1,
        work_center: row.get("work_center")?,
        change_marker: row.get("change_marker")?,
        original_timestamp,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

fn map_subject_row(row: &Row) -> Result<Subject> {
    let centers_json: String = row.get("work_centers")?;
    let work_centers: Vec<String> = serde_json::from_str(&centers_json)
        .map_err(|_| conversion_err(AppError::Other(format!("bad work_centers: {centers_json}"))))?;

    Ok(Subject {
        id: row.get("id")?,
        name: row.get("name")?,
        work_centers,
        is_active: row.get::<_, i64>("is_active")? == 1,
        created_at: row.get("created_at")?,
    })
}

fn map_holiday_row(row: &Row) -> Result<Holiday> {
    let date_str: String = row.get("date")?;
    Ok(Holiday {
        id: row.get("id")?,
        date: parse_day(&date_str)?,
        name: row.get("name")?,
        work_center: row.get("work_center")?,
    })
}

fn map_request_row(row: &Row) -> Result<PlannerRequest> {
    let start_str: String = row.get("start_date")?;
    let end_str: String = row.get("end_date")?;

    let kind_str: String = row.get("kind")?;
    let kind = RequestKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_err(AppError::InvalidRequestKind(kind_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = RequestStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_err(AppError::InvalidRequestStatus(status_str.clone())))?;

    Ok(PlannerRequest {
        id: row.get("id")?,
        subject_id: row.get("subject_id")?,
        start_date: parse_day(&start_str)?,
        end_date: parse_day(&end_str)?,
        kind,
        status,
        comment: row.get("comment")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

pub fn insert_subject(pool: &mut DbPool, name: &str, centers: &[String]) -> AppResult<i64> {
    let centers_json = serde_json::to_string(centers)
        .map_err(|e| AppError::Other(e.to_string()))?;

    pool.conn.execute(
        "INSERT INTO subjects (name, work_centers, is_active, created_at)
         VALUES (?1, ?2, 1, ?3)",
        params![name, centers_json, Local::now().to_rfc3339()],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn load_subjects(pool: &mut DbPool, include_inactive: bool) -> AppResult<Vec<Subject>> {
    let sql = if include_inactive {
        "SELECT * FROM subjects ORDER BY id ASC"
    } else {
        "SELECT * FROM subjects WHERE is_active = 1 ORDER BY id ASC"
    };

    let mut stmt = pool.conn.prepare(sql)?;
    let rows = stmt.query_map([], map_subject_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_subject(pool: &mut DbPool, id: i64) -> AppResult<Subject> {
    let subject = pool
        .conn
        .query_row(
            "SELECT * FROM subjects WHERE id = ?1",
            params![id],
            map_subject_row,
        )
        .optional()?;

    subject.ok_or(AppError::SubjectNotFound(id))
}

/// Look up a subject and refuse deactivated ones. Used by every write path;
/// read paths (list/report) accept deactivated subjects so history stays
/// inspectable.
pub fn require_active_subject(pool: &mut DbPool, id: i64) -> AppResult<Subject> {
    let subject = find_subject(pool, id)?;
    if !subject.is_active {
        return Err(AppError::SubjectInactive(id));
    }
    Ok(subject)
}

pub fn deactivate_subject(pool: &mut DbPool, id: i64) -> AppResult<()> {
    find_subject(pool, id)?;
    pool.conn.execute(
        "UPDATE subjects SET is_active = 0 WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Time entries
// ---------------------------------------------------------------------------

pub fn insert_event(pool: &mut DbPool, ev: &AttendanceEvent) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO time_entries
             (subject_id, timestamp, kind, is_active, work_center,
              change_marker, original_timestamp, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ev.subject_id,
            ev.timestamp.to_rfc3339(),
            ev.kind.to_db_str(),
            if ev.is_active { 1 } else { 0 },
            ev.work_center,
            ev.change_marker,
            ev.original_timestamp.map(|t| t.to_rfc3339()),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

/// Load a subject's events, active rows only unless `include_voided`.
/// The day-range filter runs on the parsed local timestamp rather than in
/// SQL: SQLite's date() would shift RFC 3339 offsets to UTC and misplace
/// events near midnight.
pub fn load_events(
    pool: &mut DbPool,
    subject_id: i64,
    range: Option<(NaiveDate, NaiveDate)>,
    include_voided: bool,
) -> AppResult<Vec<AttendanceEvent>> {
    let sql = if include_voided {
        "SELECT * FROM time_entries WHERE subject_id = ?1 ORDER BY timestamp ASC"
    } else {
        "SELECT * FROM time_entries WHERE subject_id = ?1 AND is_active = 1
         ORDER BY timestamp ASC"
    };

    let mut stmt = pool.conn.prepare(sql)?;
    let rows = stmt.query_map(params![subject_id], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        let ev = r?;
        if let Some((start, end)) = range {
            let day = ev.day();
            if day < start || day > end {
                continue;
            }
        }
        out.push(ev);
    }
    Ok(out)
}

/// Active events of one local day, the input set for guards and presence.
pub fn load_day_events(
    pool: &mut DbPool,
    subject_id: i64,
    day: NaiveDate,
) -> AppResult<Vec<AttendanceEvent>> {
    load_events(pool, subject_id, Some((day, day)), false)
}

pub fn find_event(pool: &mut DbPool, id: i64) -> AppResult<AttendanceEvent> {
    let ev = pool
        .conn
        .query_row(
            "SELECT * FROM time_entries WHERE id = ?1",
            params![id],
            map_event_row,
        )
        .optional()?;

    ev.ok_or(AppError::EventNotFound(id))
}

/// Correct an event's timestamp. The first correction snapshots the original
/// timestamp; later corrections keep that first snapshot.
pub fn correct_event_timestamp(
    pool: &mut DbPool,
    id: i64,
    new_ts: DateTime<Local>,
) -> AppResult<()> {
    find_event(pool, id)?;
    pool.conn.execute(
        "UPDATE time_entries
         SET original_timestamp = COALESCE(original_timestamp, timestamp),
             timestamp = ?2,
             change_marker = 'edited'
         WHERE id = ?1",
        params![id, new_ts.to_rfc3339()],
    )?;
    Ok(())
}

/// Soft-delete: the row stays for the audit trail but stops contributing to
/// any reconstruction.
pub fn void_event(pool: &mut DbPool, id: i64) -> AppResult<()> {
    find_event(pool, id)?;
    pool.conn.execute(
        "UPDATE time_entries SET is_active = 0 WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Holidays
// ---------------------------------------------------------------------------

pub fn insert_holiday(
    pool: &mut DbPool,
    date: NaiveDate,
    name: &str,
    work_center: Option<&str>,
) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO holidays (date, name, work_center) VALUES (?1, ?2, ?3)",
        params![date.format("%Y-%m-%d").to_string(), name, work_center],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn load_holidays(pool: &mut DbPool, year: Option<i32>) -> AppResult<Vec<Holiday>> {
    let mut stmt;
    let rows = match year {
        Some(y) => {
            stmt = pool.conn.prepare(
                "SELECT * FROM holidays WHERE date LIKE ?1 ORDER BY date ASC",
            )?;
            stmt.query_map(params![format!("{y}-%")], map_holiday_row)?
        }
        None => {
            stmt = pool
                .conn
                .prepare("SELECT * FROM holidays ORDER BY date ASC")?;
            stmt.query_map([], map_holiday_row)?
        }
    };

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_holiday(pool: &mut DbPool, id: i64) -> AppResult<()> {
    let n = pool
        .conn
        .execute("DELETE FROM holidays WHERE id = ?1", params![id])?;
    if n == 0 {
        return Err(AppError::HolidayNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Planner requests
// ---------------------------------------------------------------------------

pub fn insert_request(
    pool: &mut DbPool,
    subject_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    kind: RequestKind,
    comment: Option<&str>,
) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO planner_requests
             (subject_id, start_date, end_date, kind, status, comment, created_at)
         VALUES (?1, ?2, ?3, ?4, 'pending', ?5, ?6)",
        params![
            subject_id,
            start_date.format("%Y-%m-%d").to_string(),
            end_date.format("%Y-%m-%d").to_string(),
            kind.to_db_str(),
            comment,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn load_requests(
    pool: &mut DbPool,
    status: Option<RequestStatus>,
) -> AppResult<Vec<PlannerRequest>> {
    let mut stmt;
    let rows = match status {
        Some(s) => {
            stmt = pool.conn.prepare(
                "SELECT * FROM planner_requests WHERE status = ?1 ORDER BY id ASC",
            )?;
            stmt.query_map(params![s.to_db_str()], map_request_row)?
        }
        None => {
            stmt = pool
                .conn
                .prepare("SELECT * FROM planner_requests ORDER BY id ASC")?;
            stmt.query_map([], map_request_row)?
        }
    };

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_request(pool: &mut DbPool, id: i64) -> AppResult<PlannerRequest> {
    let req = pool
        .conn
        .query_row(
            "SELECT * FROM planner_requests WHERE id = ?1",
            params![id],
            map_request_row,
        )
        .optional()?;

    req.ok_or(AppError::RequestNotFound(id))
}

/// Approve or reject a pending request. Decided exactly once.
pub fn decide_request(pool: &mut DbPool, id: i64, status: RequestStatus) -> AppResult<()> {
    let req = find_request(pool, id)?;
    if !req.status.is_pending() {
        return Err(AppError::RequestAlreadyDecided(
            id,
            req.status.to_db_str().to_string(),
        ));
    }

    pool.conn.execute(
        "UPDATE planner_requests SET status = ?2 WHERE id = ?1",
        params![id, status.to_db_str()],
    )?;
    Ok(())
}
