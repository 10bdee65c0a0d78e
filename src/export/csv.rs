use crate::models::report::StoredReport;
use csv::Writer;

/// Write the report journal as CSV.
pub fn write_csv(path: &str, reports: &[StoredReport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["coords", "datetime", "status", "comment", "has_image", "source"])?;

    for report in reports {
        wtr.write_record(&[
            report.coords.clone(),
            report.datetime.clone(),
            report.status.clone(),
            report.comment.clone(),
            if report.has_image { "yes" } else { "no" }.to_string(),
            report.source.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
