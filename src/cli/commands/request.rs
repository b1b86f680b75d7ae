use crate::cli::parser::{Commands, RequestAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::request::{RequestKind, RequestStatus};
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Request { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        RequestAction::Add {
            subject,
            from,
            to,
            kind,
            comment,
        } => {
            let start = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
            let end = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;
            if end < start {
                return Err(AppError::InvalidPeriod(format!("{}:{}", from, to)));
            }

            let kind = RequestKind::from_db_str(kind)
                .ok_or_else(|| AppError::InvalidRequestKind(kind.clone()))?;

            let subj = queries::require_active_subject(&mut pool, *subject)?;
            let id = queries::insert_request(
                &mut pool,
                subj.id,
                start,
                end,
                kind,
                comment.as_deref(),
            )?;

            audit(
                &pool.conn,
                "request-add",
                &id.to_string(),
                &format!("Request for subject {}: {} to {}", subj.id, start, end),
            )?;
            success(format!("Request {} filed (pending)", id));
        }

        RequestAction::List { status } => {
            let status = match status.as_deref() {
                Some(s) => Some(
                    RequestStatus::from_db_str(s)
                        .ok_or_else(|| AppError::InvalidRequestStatus(s.to_string()))?,
                ),
                None => None,
            };

            let requests = queries::load_requests(&mut pool, status)?;

            if requests.is_empty() {
                println!("No requests.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("Subject", 8),
                Column::new("From", 10),
                Column::new("To", 10),
                Column::new("Kind", 9),
                Column::new("Status", 9),
                Column::new("Comment", 25),
            ]);

            for r in &requests {
                table.add_row(vec![
                    r.id.to_string(),
                    r.subject_id.to_string(),
                    r.start_date.format("%Y-%m-%d").to_string(),
                    r.end_date.format("%Y-%m-%d").to_string(),
                    r.kind.to_db_str().to_string(),
                    r.status.to_db_str().to_string(),
                    r.comment.clone().unwrap_or_default(),
                ]);
            }

            print!("{}", table.render());
        }

        RequestAction::Approve { id } => {
            queries::decide_request(&mut pool, *id, RequestStatus::Approved)?;
            audit(
                &pool.conn,
                "request-approve",
                &id.to_string(),
                &format!("Request {} approved", id),
            )?;
            success(format!("Request {} approved", id));
        }

        RequestAction::Reject { id } => {
            queries::decide_request(&mut pool, *id, RequestStatus::Rejected)?;
            audit(
                &pool.conn,
                "request-reject",
                &id.to_string(),
                &format!("Request {} rejected", id),
            )?;
            success(format!("Request {} rejected", id));
        }
    }

    Ok(())
}
