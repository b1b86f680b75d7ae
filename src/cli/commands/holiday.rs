use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Holiday { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        HolidayAction::Add { date, name, center } => {
            let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
            let id = queries::insert_holiday(&mut pool, d, name, center.as_deref())?;

            audit(
                &pool.conn,
                "holiday-add",
                &id.to_string(),
                &format!("Holiday '{}' on {}", name, d),
            )?;
            success(format!("Holiday '{}' added for {}", name, d));
        }

        HolidayAction::List { year } => {
            let holidays = queries::load_holidays(&mut pool, *year)?;

            if holidays.is_empty() {
                println!("No holidays recorded.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("Date", 10),
                Column::new("Name", 25),
                Column::new("Center", 15),
            ]);

            for h in &holidays {
                table.add_row(vec![
                    h.id.to_string(),
                    h.date.format("%Y-%m-%d").to_string(),
                    h.name.clone(),
                    h.center_label().to_string(),
                ]);
            }

            print!("{}", table.render());
        }

        HolidayAction::Del { id } => {
            queries::delete_holiday(&mut pool, *id)?;

            audit(
                &pool.conn,
                "holiday-del",
                &id.to_string(),
                &format!("Holiday {} deleted", id),
            )?;
            success(format!("Holiday {} deleted", id));
        }
    }

    Ok(())
}
