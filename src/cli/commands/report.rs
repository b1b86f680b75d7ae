use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconstruct::compute_worked_time;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::date::resolve_period;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_optional_datetime;
use chrono::Local;
use serde_json::json;

/// Reconstruct worked time for a subject over a period.
///
/// The reconstruction itself is pure; everything fallible (DB open, row
/// mapping, period parsing) happens before it runs, so a DB failure surfaces
/// as an error instead of a misleading zero total.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        subject,
        period,
        as_of,
        json: json_out,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let subj = queries::find_subject(&mut pool, *subject)?;
        let range = resolve_period(period.as_deref())?;
        let as_of = parse_optional_datetime(as_of.as_ref())?.unwrap_or_else(Local::now);

        // Query layer pre-filters by subject and is_active, per the
        // reconstruction's caller contract.
        let events = queries::load_events(&mut pool, subj.id, Some(range), false)?;

        let worked = compute_worked_time(&events, as_of);

        if *json_out {
            let days: Vec<_> = worked
                .per_day
                .iter()
                .map(|(day, dur)| {
                    json!({
                        "date": day.format("%Y-%m-%d").to_string(),
                        "minutes": dur.num_minutes(),
                    })
                })
                .collect();

            let doc = json!({
                "subject_id": subj.id,
                "subject": subj.name,
                "total_minutes": worked.total_minutes(),
                "days": days,
            });

            println!(
                "{}",
                serde_json::to_string_pretty(&doc)
                    .map_err(|e| AppError::Other(e.to_string()))?
            );
            return Ok(());
        }

        println!("Worked time for {} (subject {}):\n", subj.name, subj.id);

        if worked.per_day.is_empty() {
            println!("No entries in the selected period.");
            println!("\nTotal: {}", mins2readable(0, false, false));
            return Ok(());
        }

        let mut table = Table::new(vec![Column::new("Date", 10), Column::new("Worked", 9)]);
        for (day, dur) in &worked.per_day {
            table.add_row(vec![
                day.format("%Y-%m-%d").to_string(),
                mins2readable(dur.num_minutes(), false, true),
            ]);
        }
        print!("{}", table.render());

        println!(
            "\nTotal: {}",
            mins2readable(worked.total_minutes(), false, false)
        );
    }

    Ok(())
}
