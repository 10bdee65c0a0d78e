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

/// Handle the `register` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        name,
        email,
        password,
    } = cmd
    {
        validate::validate_name(name)?;
        validate::validate_email(email)?;

        let password = match password {
            Some(p) => {
                validate::validate_password(p)?;
                p.clone()
            }
            None => {
                let first = prompt_line("Password")?;
                validate::validate_password(&first)?;
                let confirm = prompt_line("Confirm password")?;
                validate::validate_password_confirmation(&first, &confirm)?;
                first
            }
        };

        let pool = DbPool::new(&cfg.database)?;
        let mut resolver = ConfigResolver::new(&pool.conn, cfg.env_file.clone());
        let client = ReportClient::new(resolver.resolve()?)?;

        let auth = block_on(client.register(name, email, &password))??;

        session::save(&pool.conn, &auth.access_token, &auth.user)?;

        if let Err(e) = ttlog(&pool.conn, "register", &auth.user.email, "Account created") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "Account created — logged in as {} <{}>",
            auth.user.name, auth.user.email
        ));
    }

    Ok(())
}
