use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `prefs` table, the namespaced key-value store backing the
/// endpoint override, the cooldown expiry, the session and the device id.
fn ensure_prefs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS prefs (
            namespace TEXT NOT NULL,
            key       TEXT NOT NULL,
            value     TEXT NOT NULL,
            PRIMARY KEY (namespace, key)
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `reports` table exists.
fn reports_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='reports'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `reports` table has a `comment` column.
fn reports_has_comment_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('reports')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "comment" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `reports` table with the modern schema (including `comment`).
fn create_reports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            coords     TEXT NOT NULL,
            datetime   TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'Received',
            comment    TEXT NOT NULL DEFAULT '',
            has_image  INTEGER NOT NULL DEFAULT 0,
            source     TEXT NOT NULL DEFAULT 'submit' CHECK(source IN ('submit','remote')),
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_source ON reports(source);
        CREATE INDEX IF NOT EXISTS idx_reports_created ON reports(created_at);
        "#,
    )?;
    Ok(())
}

/// Add the `comment` column to a pre-0.3 `reports` table.
fn migrate_add_comment_column(conn: &Connection) -> Result<()> {
    let version = "20250712_0001_add_report_comment";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE reports ADD COLUMN comment TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added comment column to reports')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'comment' to reports table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_prefs_table(conn)?;

    if !reports_table_exists(conn)? {
        create_reports_table(conn)?;
    } else if !reports_has_comment_column(conn)? {
        migrate_add_comment_column(conn)?;
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_reports_source ON reports(source);
            CREATE INDEX IF NOT EXISTS idx_reports_created ON reports(created_at);
            "#,
        )?;
    }

    Ok(())
}
