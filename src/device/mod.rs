//! Device identity used as the submission key.
//!
//! The API groups records by a MAC-format device id. Resolution order:
//! explicit config override → value cached in the `device` prefs
//! namespace → first usable hardware address read from the OS → the
//! constant fallback. The first successful resolution is cached so the
//! id stays stable even if interfaces appear or vanish later.

use crate::config::Config;
use crate::db::prefs::{self, NS_DEVICE};
use crate::errors::AppResult;
use rusqlite::Connection;

pub const FALLBACK_DEVICE_ID: &str = "02:00:00:00:00:00";
pub const KEY_DEVICE_ID: &str = "device_id";

pub fn resolve(conn: &Connection, cfg: &Config) -> AppResult<String> {
    if let Some(id) = &cfg.device_id {
        let id = id.trim();
        if !id.is_empty() {
            return Ok(id.to_string());
        }
    }

    if let Some(cached) = prefs::get(conn, NS_DEVICE, KEY_DEVICE_ID)? {
        return Ok(cached);
    }

    let id = hardware_address().unwrap_or_else(|| FALLBACK_DEVICE_ID.to_string());
    prefs::set(conn, NS_DEVICE, KEY_DEVICE_ID, &id)?;
    Ok(id)
}

/// Forget the cached id; the next `resolve` re-detects.
pub fn reset(conn: &Connection) -> AppResult<()> {
    prefs::remove(conn, NS_DEVICE, KEY_DEVICE_ID)
}

#[cfg(target_os = "linux")]
fn hardware_address() -> Option<String> {
    use std::fs;

    let entries = fs::read_dir("/sys/class/net").ok()?;
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    for name in names {
        if name == "lo" {
            continue;
        }
        if let Ok(addr) = fs::read_to_string(format!("/sys/class/net/{}/address", name)) {
            let addr = addr.trim().to_string();
            if !addr.is_empty() && addr != "00:00:00:00:00:00" {
                return Some(addr);
            }
        }
    }
    None
}

#[cfg(not(target_os = "linux"))]
fn hardware_address() -> Option<String> {
    None
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
    fn config_override_wins() {
        let conn = test_conn();
        let cfg = Config {
            device_id: Some(" aa:bb:cc:dd:ee:ff ".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve(&conn, &cfg).unwrap(), "aa:bb:cc:dd:ee:ff");
        // Overrides are not cached: removing it falls back to detection
        assert!(prefs::get(&conn, NS_DEVICE, KEY_DEVICE_ID).unwrap().is_none());
    }

    #[test]
    fn resolution_is_cached_and_stable() {
        let conn = test_conn();
        let cfg = Config {
            device_id: None,
            ..Config::default()
        };

        let first = resolve(&conn, &cfg).unwrap();
        assert_eq!(
            prefs::get(&conn, NS_DEVICE, KEY_DEVICE_ID).unwrap().as_deref(),
            Some(first.as_str())
        );

        // Whatever was detected the first time keeps winning
        assert_eq!(resolve(&conn, &cfg).unwrap(), first);
    }

    #[test]
    fn cached_value_wins_over_detection() {
        let conn = test_conn();
        let cfg = Config {
            device_id: None,
            ..Config::default()
        };
        prefs::set(&conn, NS_DEVICE, KEY_DEVICE_ID, "12:34:56:78:9a:bc").unwrap();
        assert_eq!(resolve(&conn, &cfg).unwrap(), "12:34:56:78:9a:bc");
    }

    #[test]
    fn reset_clears_the_cache() {
        let conn = test_conn();
        prefs::set(&conn, NS_DEVICE, KEY_DEVICE_ID, "12:34:56:78:9a:bc").unwrap();
        reset(&conn).unwrap();
        assert!(prefs::get(&conn, NS_DEVICE, KEY_DEVICE_ID).unwrap().is_none());
    }
}
