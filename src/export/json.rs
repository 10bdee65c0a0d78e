use crate::models::report::StoredReport;
use std::fs::File;

/// Write the report journal as pretty-printed JSON.
pub fn write_json(path: &str, reports: &[StoredReport]) -> std::io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, reports).map_err(std::io::Error::other)?;
    Ok(())
}
