use crate::api::block_on;
use crate::api::client::ReportClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::resolver::ConfigResolver;
use crate::db::pool::DbPool;
use crate::db::queries::{load_reports, replace_remote_cache};
use crate::device;
use crate::errors::AppResult;
use crate::models::report::{ReportRecord, StoredReport};
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// Handle the `records` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { local } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *local {
            let reports = load_reports(&mut pool)?;
            if reports.is_empty() {
                info("No records in the local journal");
                return Ok(());
            }
            print_local(&reports);
            return Ok(());
        }

        let device_id = device::resolve(&pool.conn, cfg)?;
        let endpoint = {
            let mut resolver = ConfigResolver::new(&pool.conn, cfg.env_file.clone());
            resolver.resolve()?
        };

        let client = ReportClient::new(endpoint)?;
        let records = block_on(client.records(&device_id))??;

        if records.is_empty() {
            info(format!("No records found for device {}", device_id));
        } else {
            print_remote(&records);
        }

        // Refresh the cache so `records --local` and `export` stay useful
        let cached: Vec<StoredReport> = records.iter().map(StoredReport::from_remote).collect();
        replace_remote_cache(&mut pool.conn, &cached)?;
    }

    Ok(())
}

fn print_remote(records: &[ReportRecord]) {
    let mut table = Table::new(vec![
        Column::new("COORDS", 24),
        Column::new("DATE", 20),
        Column::new("STATUS", 12),
        Column::new("IMG", 3),
    ]);

    for rec in records {
        table.add_row(vec![
            rec.coords.clone(),
            rec.datetime.clone(),
            rec.status.clone(),
            if rec.image.as_deref().is_some_and(|s| !s.is_empty()) {
                "yes".to_string()
            } else {
                "-".to_string()
            },
        ]);
    }

    print!("{}", table.render());
    println!("{} record(s)", records.len());
}

fn print_local(reports: &[StoredReport]) {
    let mut table = Table::new(vec![
        Column::new("COORDS", 24),
        Column::new("DATE", 20),
        Column::new("STATUS", 12),
        Column::new("SOURCE", 7),
        Column::new("COMMENT", 30),
    ]);

    for report in reports {
        table.add_row(vec![
            report.coords.clone(),
            report.datetime.clone(),
            report.status.clone(),
            report.source.clone(),
            report.comment.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("{} record(s)", reports.len());
}
