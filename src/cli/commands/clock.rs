use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ensure_can_record;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_datetime;
use chrono::Local;

/// Record a live clock action for a subject.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        action,
        subject,
        at,
        center,
    } = cmd
    {
        //
        // 1. Parse the action word
        //
        let kind = EventKind::from_cli_code(action)
            .ok_or_else(|| AppError::InvalidEventKind(action.clone()))?;

        //
        // 2. Resolve the timestamp (explicit --at or now)
        //
        let at = parse_optional_datetime(at.as_ref())?.unwrap_or_else(Local::now);

        //
        // 3. Subject must exist and be active
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let subj = queries::require_active_subject(&mut pool, *subject)?;

        //
        // 4. Guard: breaks and clock-out need a clock-in earlier today
        //
        let todays = queries::load_day_events(&mut pool, subj.id, at.date_naive())?;
        ensure_can_record(subj.id, kind, &todays, at)?;

        //
        // 5. Work center: explicit flag, else first assigned, else default
        //
        let center = center
            .clone()
            .or_else(|| subj.work_centers.first().cloned())
            .unwrap_or_else(|| cfg.default_work_center.clone());

        //
        // 6. Persist + audit
        //
        let ev = AttendanceEvent::new(subj.id, at, kind, Some(center));
        let id = queries::insert_event(&mut pool, &ev)?;

        audit(
            &pool.conn,
            "clock",
            &id.to_string(),
            &format!(
                "{} for subject {} at {}",
                kind.label(),
                subj.id,
                at.format("%Y-%m-%d %H:%M")
            ),
        )?;

        success(format!(
            "{} recorded for {} at {}",
            kind.label(),
            subj.name,
            at.format("%Y-%m-%d %H:%M")
        ));
    }

    Ok(())
}
