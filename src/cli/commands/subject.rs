use crate::cli::parser::{Commands, SubjectAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Subject { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        SubjectAction::Add { name, centers } => {
            let centers: Vec<String> = centers
                .as_deref()
                .map(|s| {
                    s.split(',')
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty())
                        .collect()
                })
                .unwrap_or_default();

            let id = queries::insert_subject(&mut pool, name, &centers)?;
            audit(
                &pool.conn,
                "subject-add",
                &id.to_string(),
                &format!("Subject '{}' registered", name),
            )?;
            success(format!("Subject '{}' registered with id {}", name, id));
        }

        SubjectAction::List { all } => {
            let subjects = queries::load_subjects(&mut pool, *all)?;

            if subjects.is_empty() {
                println!("No subjects registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("Name", cfg.name_column_width),
                Column::new("Centers", 25),
                Column::new("Active", 6),
            ]);

            for s in &subjects {
                table.add_row(vec![
                    s.id.to_string(),
                    s.name.clone(),
                    s.centers_label(),
                    if s.is_active { "yes" } else { "no" }.to_string(),
                ]);
            }

            print!("{}", table.render());
        }

        SubjectAction::Deactivate { id } => {
            queries::deactivate_subject(&mut pool, *id)?;
            audit(
                &pool.conn,
                "subject-deactivate",
                &id.to_string(),
                &format!("Subject {} deactivated", id),
            )?;
            success(format!("Subject {} deactivated", id));
        }
    }

    Ok(())
}
