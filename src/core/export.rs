//! Export of the local report journal/cache.

use crate::db::pool::DbPool;
use crate::db::queries::load_reports;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::utils::path::is_absolute;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output path must be absolute: {}",
                file
            )));
        }

        let dest = Path::new(file);
        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "file already exists (use --force to overwrite): {}",
                file
            )));
        }

        let reports = load_reports(pool)?;
        if reports.is_empty() {
            return Err(AppError::Export(
                "no reports to export — submit or sync first".to_string(),
            ));
        }

        match format {
            ExportFormat::Csv => write_csv(file, &reports)?,
            ExportFormat::Json => write_json(file, &reports)?,
        }

        notify_export_success(format.as_str(), dest);
        Ok(())
    }
}
