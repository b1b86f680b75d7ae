use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presence::presence_now;
use crate::core::reconstruct::compute_worked_time;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_presence};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use chrono::Local;

/// Presence board: every active subject with what they are doing right now
/// and how much they have worked today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { center } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let now = Local::now();
        let today = now.date_naive();

        let subjects = queries::load_subjects(&mut pool, false)?;
        let subjects: Vec<_> = match center {
            Some(c) => subjects.into_iter().filter(|s| s.has_center(c)).collect(),
            None => subjects,
        };

        if subjects.is_empty() {
            println!("No active subjects.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Name", cfg.name_column_width),
            Column::new("Status", 11),
            Column::new("Today", 6),
        ]);

        for s in &subjects {
            let events = queries::load_day_events(&mut pool, s.id, today)?;
            let presence = presence_now(&events, now);
            let worked = compute_worked_time(&events, now);

            table.add_row(vec![
                s.id.to_string(),
                s.name.clone(),
                format!(
                    "{}{}{}",
                    color_for_presence(presence),
                    presence.label(),
                    RESET
                ),
                mins2readable(worked.total_minutes(), false, true),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
