use crate::cli::parser::{Commands, EntryAction};
use crate::config::Config;
use crate::core::clock::ensure_can_record;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use crate::utils::time::parse_datetime;

/// Back-office entry management: add on behalf of a subject, correct a
/// timestamp, void a row. Every action leaves an audit line; reports always
/// recompute from the rows as they stand now.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Entry { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        EntryAction::Add {
            subject,
            kind,
            at,
            center,
        } => {
            let kind = EventKind::from_cli_code(kind)
                .ok_or_else(|| AppError::InvalidEventKind(kind.clone()))?;
            let at = parse_datetime(at)?;

            let subj = queries::require_active_subject(&mut pool, *subject)?;

            // Same rule as the live path: no break or clock-out without a
            // clock-in on that day.
            let day_events = queries::load_day_events(&mut pool, subj.id, at.date_naive())?;
            ensure_can_record(subj.id, kind, &day_events, at)?;

            let mut ev = AttendanceEvent::new(subj.id, at, kind, center.clone());
            ev.source = "manual".to_string();
            let id = queries::insert_event(&mut pool, &ev)?;

            audit(
                &pool.conn,
                "entry-add",
                &id.to_string(),
                &format!(
                    "Manual {} for subject {} at {}",
                    kind.label(),
                    subj.id,
                    at.format("%Y-%m-%d %H:%M")
                ),
            )?;
            success(format!("Entry {} added", id));
        }

        EntryAction::Edit { id, at } => {
            let at = parse_datetime(at)?;
            queries::correct_event_timestamp(&mut pool, *id, at)?;

            audit(
                &pool.conn,
                "entry-edit",
                &id.to_string(),
                &format!("Entry {} corrected to {}", id, at.format("%Y-%m-%d %H:%M")),
            )?;
            success(format!(
                "Entry {} corrected to {}",
                id,
                at.format("%Y-%m-%d %H:%M")
            ));
        }

        EntryAction::Void { id } => {
            queries::void_event(&mut pool, *id)?;

            audit(
                &pool.conn,
                "entry-void",
                &id.to_string(),
                &format!("Entry {} voided", id),
            )?;
            success(format!("Entry {} voided", id));
        }
    }

    Ok(())
}
