//! Namespaced key-value preference store.
//!
//! One `prefs` table holds every small persisted setting, keyed by a
//! namespace per concern: the endpoint override, the cooldown expiry, the
//! login session and the cached device id all live here as strings.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

/// Endpoint override written by `config --host`.
pub const NS_API_CONFIG: &str = "api_config";
/// Cooldown expiry written after a successful submission.
pub const NS_COUNTDOWN: &str = "countdown_prefs";
/// Login session written by `login` / `register`.
pub const NS_SESSION: &str = "user_session";
/// Cached device identifier.
pub const NS_DEVICE: &str = "device";

pub fn get(conn: &Connection, namespace: &str, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT value FROM prefs WHERE namespace = ?1 AND key = ?2",
    )?;
    let value = stmt
        .query_row(params![namespace, key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn set(conn: &Connection, namespace: &str, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO prefs (namespace, key, value) VALUES (?1, ?2, ?3)
         ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![namespace, key, value])?;
    Ok(())
}

pub fn remove(conn: &Connection, namespace: &str, key: &str) -> AppResult<()> {
    conn.execute(
        "DELETE FROM prefs WHERE namespace = ?1 AND key = ?2",
        params![namespace, key],
    )?;
    Ok(())
}

/// Drop every key of a namespace (the SharedPreferences `clear()`
/// equivalent).
pub fn clear_namespace(conn: &Connection, namespace: &str) -> AppResult<()> {
    conn.execute("DELETE FROM prefs WHERE namespace = ?1", params![namespace])?;
    Ok(())
}

/// True when the namespace holds at least one key.
pub fn namespace_has_keys(conn: &Connection, namespace: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare_cached("SELECT 1 FROM prefs WHERE namespace = ?1 LIMIT 1")?;
    Ok(stmt.exists(params![namespace])?)
}

/// Read an epoch-milliseconds value stored as a decimal string.
/// Unparseable values are reported as None (treated as absent upstream).
pub fn get_millis(conn: &Connection, namespace: &str, key: &str) -> AppResult<Option<i64>> {
    Ok(get(conn, namespace, key)?.and_then(|v| v.trim().parse::<i64>().ok()))
}

pub fn set_millis(conn: &Connection, namespace: &str, key: &str, value: i64) -> AppResult<()> {
    set(conn, namespace, key, &value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    #[test]
    fn set_get_roundtrip() {
        let conn = test_conn();
        set(&conn, NS_API_CONFIG, "API_HOST", "1.2.3.4").unwrap();
        assert_eq!(
            get(&conn, NS_API_CONFIG, "API_HOST").unwrap().as_deref(),
            Some("1.2.3.4")
        );
    }

    #[test]
    fn set_overwrites_existing_key() {
        let conn = test_conn();
        set(&conn, NS_API_CONFIG, "API_PORT", "2000").unwrap();
        set(&conn, NS_API_CONFIG, "API_PORT", "9999").unwrap();
        assert_eq!(
            get(&conn, NS_API_CONFIG, "API_PORT").unwrap().as_deref(),
            Some("9999")
        );
    }

    #[test]
    fn clear_namespace_leaves_others_untouched() {
        let conn = test_conn();
        set(&conn, NS_API_CONFIG, "API_HOST", "1.2.3.4").unwrap();
        set(&conn, NS_SESSION, "access_token", "tok").unwrap();

        clear_namespace(&conn, NS_API_CONFIG).unwrap();

        assert!(!namespace_has_keys(&conn, NS_API_CONFIG).unwrap());
        assert!(namespace_has_keys(&conn, NS_SESSION).unwrap());
    }

    #[test]
    fn millis_roundtrip_and_garbage() {
        let conn = test_conn();
        set_millis(&conn, NS_COUNTDOWN, "countdown_end_time", 1_720_000_000_123).unwrap();
        assert_eq!(
            get_millis(&conn, NS_COUNTDOWN, "countdown_end_time").unwrap(),
            Some(1_720_000_000_123)
        );

        set(&conn, NS_COUNTDOWN, "countdown_end_time", "not-a-number").unwrap();
        assert_eq!(
            get_millis(&conn, NS_COUNTDOWN, "countdown_end_time").unwrap(),
            None
        );
    }
}
