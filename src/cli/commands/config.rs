use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::resolver::ConfigResolver;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{kv, success};

/// Handle the `config` subcommand: endpoint override management.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        source,
        host,
        port,
        reset,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut resolver = ConfigResolver::new(&pool.conn, cfg.env_file.clone());

        if *reset {
            resolver.clear_override()?;
            success("Endpoint override cleared — using the bundled endpoint file");
        }

        if let Some(h) = host {
            resolver.set_override(h, port.as_deref())?;
            success(format!("Endpoint override set: {}", resolver.resolve()?));
        }

        if *source {
            kv("Source", resolver.source()?.as_str());
        }

        // Default action (and --print): show the resolved endpoint
        if *print_config || (host.is_none() && !reset && !source) {
            let endpoint = resolver.resolve()?;
            kv("Endpoint", &endpoint);
            kv("Base URL", endpoint.base_url());
            kv("Source", resolver.source()?.as_str());
        }
    }

    Ok(())
}
