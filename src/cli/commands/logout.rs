use crate::config::Config;
use crate::core::session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `logout` subcommand.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match session::load(&pool.conn)? {
        Some(s) => {
            session::clear(&pool.conn)?;
            success(format!("Logged out {}", s.user_email));
        }
        None => info("No stored session"),
    }

    Ok(())
}
