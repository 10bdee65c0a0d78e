use crate::api::block_on;
use crate::api::client::ReportClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::resolver::ConfigResolver;
use crate::core::cooldown::{CooldownState, CooldownTimer};
use crate::core::session;
use crate::db::pool::DbPool;
use crate::device;
use crate::errors::AppResult;
use crate::ui::messages::{header, kv, success};
use crate::utils::time::{format_hms, now_millis};
use std::io::Write;

/// Handle the `status` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        watch,
        ping,
        reset_cooldown,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let timer = CooldownTimer::new(&pool.conn);

        if *reset_cooldown {
            timer.reset()?;
            success("Cooldown cleared — you can report again");
            return Ok(());
        }

        header("TrashReporter status");

        kv("Device id", device::resolve(&pool.conn, cfg)?);

        let mut resolver = ConfigResolver::new(&pool.conn, cfg.env_file.clone());
        let endpoint = resolver.resolve()?;
        kv("Endpoint", &endpoint);
        kv("Base URL", endpoint.base_url());
        kv("Source", resolver.source()?.as_str());

        match session::load(&pool.conn)? {
            Some(s) if s.is_fresh(now_millis()) => {
                kv("Session", format!("{} <{}>", s.user_name, s.user_email));
            }
            Some(s) => {
                kv("Session", format!("{} <{}> (expired)", s.user_name, s.user_email));
            }
            None => kv("Session", "not logged in"),
        }

        match timer.check_state()? {
            CooldownState::Idle => kv("Cooldown", "idle — reporting allowed"),
            CooldownState::Active { remaining_millis } => {
                kv(
                    "Cooldown",
                    format!("next report in {}", format_hms(remaining_millis)),
                );
            }
        }

        if *ping {
            let health = block_on(ReportClient::new(endpoint)?.health())??;
            kv(
                "API health",
                format!("{} ({} reports)", health.status, health.total_reports),
            );
        }

        if *watch {
            watch_countdown(&timer)?;
        }
    }

    Ok(())
}

/// Re-check the gate once per second until it expires, redrawing a single
/// countdown line.
fn watch_countdown(timer: &CooldownTimer) -> AppResult<()> {
    loop {
        match timer.tick()? {
            CooldownState::Active { remaining_millis } => {
                print!("\r⏳ Next report in {} ", format_hms(remaining_millis));
                std::io::stdout().flush().ok();
                std::thread::sleep(std::time::Duration::from_secs(1));
            }
            CooldownState::Idle => {
                println!();
                success("You can report again!");
                return Ok(());
            }
        }
    }
}
