use crate::ui::messages::warning;
use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_subjects_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            work_centers TEXT NOT NULL DEFAULT '[]',
            is_active    INTEGER NOT NULL DEFAULT 1,
            created_at   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id         INTEGER NOT NULL REFERENCES subjects(id),
            timestamp          TEXT NOT NULL,
            kind               TEXT NOT NULL
                               CHECK(kind IN ('clock_in','break_start','break_end','clock_out')),
            is_active          INTEGER NOT NULL DEFAULT 1,
            work_center        TEXT,
            change_marker      TEXT,
            original_timestamp TEXT,
            source             TEXT NOT NULL DEFAULT 'cli',
            created_at         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_subject_ts
            ON time_entries(subject_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_entries_subject_active
            ON time_entries(subject_id, is_active);
        "#,
    )?;
    Ok(())
}

fn ensure_holidays_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            name        TEXT NOT NULL,
            work_center TEXT
        );
        "#,
    )?;
    Ok(())
}

fn ensure_requests_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS planner_requests (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id INTEGER NOT NULL REFERENCES subjects(id),
            start_date TEXT NOT NULL,
            end_date   TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('vacation','leave','other')),
            status     TEXT NOT NULL DEFAULT 'pending'
                       CHECK(status IN ('pending','approved','rejected')),
            comment    TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if `time_entries` has a given column.
fn entries_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('time_entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Migrate a pre-correction `time_entries` table: add the edit-audit columns.
fn migrate_add_change_columns(conn: &Connection) -> Result<()> {
    if !entries_has_column(conn, "change_marker")? {
        warning("Adding 'change_marker' column to time_entries...");
        conn.execute_batch("ALTER TABLE time_entries ADD COLUMN change_marker TEXT;")?;
    }
    if !entries_has_column(conn, "original_timestamp")? {
        warning("Adding 'original_timestamp' column to time_entries...");
        conn.execute_batch("ALTER TABLE time_entries ADD COLUMN original_timestamp TEXT;")?;
    }
    Ok(())
}

/// Run every pending migration. Safe to call on every startup; each step is
/// idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_subjects_table(conn)?;
    ensure_time_entries_table(conn)?;
    ensure_holidays_table(conn)?;
    ensure_requests_table(conn)?;
    migrate_add_change_columns(conn)?;
    Ok(())
}
