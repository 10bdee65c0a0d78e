use crate::api::block_on;
use crate::api::client::ReportClient;
use crate::cli::commands::prompt_line;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::resolver::ConfigResolver;
use crate::core::{session, validate};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `login` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => prompt_line("Password")?,
        };

        validate::validate_email(email)?;
        validate::validate_password(&password)?;

        let pool = DbPool::new(&cfg.database)?;
        let mut resolver = ConfigResolver::new(&pool.conn, cfg.env_file.clone());
        let client = ReportClient::new(resolver.resolve()?)?;

        let auth = block_on(client.login(email, &password))??;

        session::save(&pool.conn, &auth.access_token, &auth.user)?;

        if let Err(e) = ttlog(&pool.conn, "login", &auth.user.email, "Logged in") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Logged in as {} <{}>", auth.user.name, auth.user.email));
    }

    Ok(())
}
