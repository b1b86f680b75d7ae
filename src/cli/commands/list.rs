use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_active};
use crate::utils::date::resolve_period;
use crate::utils::table::{Column, Table};

/// List raw attendance entries for a subject.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        subject,
        period,
        all,
        json,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // Reads accept deactivated subjects; history stays inspectable.
        let subj = queries::find_subject(&mut pool, *subject)?;
        let range = resolve_period(period.as_deref())?;
        let events = queries::load_events(&mut pool, subj.id, Some(range), *all)?;

        if *json {
            println!(
                "{}",
                serde_json::to_string_pretty(&events)
                    .map_err(|e| crate::errors::AppError::Other(e.to_string()))?
            );
            return Ok(());
        }

        if events.is_empty() {
            println!("No entries for {} in the selected period.", subj.name);
            return Ok(());
        }

        println!("Entries for {} (subject {}):\n", subj.name, subj.id);

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Date", 10),
            Column::new("Time", 5),
            Column::new("Kind", 12),
            Column::new("Center", 15),
            Column::new("Flags", 12),
        ]);

        for ev in &events {
            let mut flags = Vec::new();
            if ev.is_edited() {
                flags.push("edited");
            }
            if !ev.is_active {
                flags.push("voided");
            }

            table.add_row(vec![
                format!("{}{}{}", color_for_active(ev.is_active), ev.id, RESET),
                ev.date_str(),
                ev.time_str(),
                ev.kind.label().to_string(),
                ev.center_label().to_string(),
                flags.join(","),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
