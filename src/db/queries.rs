use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::report::StoredReport;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<StoredReport> {
    Ok(StoredReport {
        id: row.get("id")?,
        coords: row.get("coords")?,
        datetime: row.get("datetime")?,
        status: row.get("status")?,
        comment: row.get("comment")?,
        has_image: row.get::<_, i32>("has_image")? == 1,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_report(conn: &Connection, report: &StoredReport) -> AppResult<()> {
    conn.execute(
        "INSERT INTO reports (coords, datetime, status, comment, has_image, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            report.coords,
            report.datetime,
            report.status,
            report.comment,
            if report.has_image { 1 } else { 0 },
            report.source,
            report.created_at,
        ],
    )?;
    Ok(())
}

/// Load the journal/cache, newest first.
pub fn load_reports(pool: &mut DbPool) -> AppResult<Vec<StoredReport>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM reports
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace the remote-sourced cache rows with a fresh fetch.
/// Journal rows written at submission time are kept: they carry the
/// comment, which the server's record list drops.
pub fn replace_remote_cache(conn: &mut Connection, records: &[StoredReport]) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM reports WHERE source = 'remote'", [])?;
    for rec in records {
        tx.execute(
            "INSERT INTO reports (coords, datetime, status, comment, has_image, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 'remote', ?6)",
            params![
                rec.coords,
                rec.datetime,
                rec.status,
                rec.comment,
                if rec.has_image { 1 } else { 0 },
                rec.created_at,
            ],
        )?;
    }
    tx.commit()?;
    Ok(())
}

pub fn count_reports(conn: &Connection) -> AppResult<i64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
    Ok(n)
}
