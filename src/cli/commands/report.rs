use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::resolver::ConfigResolver;
use crate::core::submit::SubmitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::report::Coordinates;
use crate::ui::messages::{info, kv, success, warning};
use crate::utils::time::format_hms;

/// Handle the `report` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        image,
        lat,
        lon,
        comment,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut resolver = ConfigResolver::new(&pool.conn, cfg.env_file.clone());

        let coords = Coordinates::new(*lat, *lon);
        info(format!("Submitting report from {}…", coords.display()));

        match SubmitLogic::submit(&pool.conn, cfg, &mut resolver, image, coords, comment)? {
            Ok(accepted) => {
                let message = if accepted.message.is_empty() {
                    "Report submitted successfully!".to_string()
                } else {
                    accepted.message
                };
                success(message);
                if let Some(id) = accepted.report_id {
                    kv("Report id", id);
                }
                kv("Status", accepted.status);
            }
            Err(refusal) => {
                warning(format!(
                    "Cooldown active — next report allowed in {}",
                    format_hms(refusal.remaining_millis)
                ));
            }
        }
    }

    Ok(())
}
