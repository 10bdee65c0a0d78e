//! API endpoint resolution.
//!
//! Precedence: override layer (prefs, `api_config` namespace) > bundled
//! endpoint file (`KEY=VALUE` lines) > static defaults. The override layer
//! is all-or-nothing: as soon as either key is present there, the bundled
//! file is not consulted at all and any missing key falls back to its
//! static default.

use crate::db::prefs::{self, NS_API_CONFIG};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub const KEY_HOST: &str = "API_HOST";
pub const KEY_PORT: &str = "API_PORT";

pub const DEFAULT_HOST: &str = "10.208.16.44";
pub const DEFAULT_PORT: &str = "2000";

/// Resolved host/port pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: String,
}

impl Endpoint {
    /// Report endpoints live under `/api`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/api", self.host, self.port)
    }

    /// Auth and health endpoints hang off the bare root.
    pub fn root_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Which layer produced the endpoint, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Override,
    Bundled,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Override => "user override",
            ConfigSource::Bundled => "bundled endpoint file",
        }
    }
}

pub struct ConfigResolver<'c> {
    conn: &'c Connection,
    env_file: PathBuf,
    // Memoized result; must be dropped whenever the override layer is
    // written, or a stale endpoint would survive a `config --host`.
    cache: Option<Endpoint>,
}

impl<'c> ConfigResolver<'c> {
    pub fn new(conn: &'c Connection, env_file: impl Into<PathBuf>) -> Self {
        Self {
            conn,
            env_file: env_file.into(),
            cache: None,
        }
    }

    /// Resolve the endpoint, memoizing the result until `invalidate`.
    /// Never fails outward: every degraded input yields the defaults.
    pub fn resolve(&mut self) -> AppResult<Endpoint> {
        if let Some(cached) = &self.cache {
            return Ok(cached.clone());
        }

        let endpoint = match self.load_override()? {
            Some(ep) => ep,
            None => load_env_file(&self.env_file),
        };

        self.cache = Some(endpoint.clone());
        Ok(endpoint)
    }

    pub fn base_url(&mut self) -> AppResult<String> {
        Ok(self.resolve()?.base_url())
    }

    pub fn root_url(&mut self) -> AppResult<String> {
        Ok(self.resolve()?.root_url())
    }

    /// Write both keys to the override layer. A missing port gets the
    /// static default, matching the submission server's standard port.
    pub fn set_override(&mut self, host: &str, port: Option<&str>) -> AppResult<()> {
        prefs::set(self.conn, NS_API_CONFIG, KEY_HOST, host.trim())?;
        prefs::set(
            self.conn,
            NS_API_CONFIG,
            KEY_PORT,
            port.unwrap_or(DEFAULT_PORT).trim(),
        )?;
        self.invalidate();
        Ok(())
    }

    /// Remove every override key, returning authority to the bundled file.
    pub fn clear_override(&mut self) -> AppResult<()> {
        prefs::clear_namespace(self.conn, NS_API_CONFIG)?;
        self.invalidate();
        Ok(())
    }

    /// Report which layer is currently authoritative.
    pub fn source(&self) -> AppResult<ConfigSource> {
        let has_override = prefs::get(self.conn, NS_API_CONFIG, KEY_HOST)?.is_some()
            || prefs::get(self.conn, NS_API_CONFIG, KEY_PORT)?.is_some();
        Ok(if has_override {
            ConfigSource::Override
        } else {
            ConfigSource::Bundled
        })
    }

    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Some(endpoint) when the override layer holds at least one key.
    /// The missing key falls back to its static default, not to the
    /// bundled file.
    fn load_override(&self) -> AppResult<Option<Endpoint>> {
        let host = prefs::get(self.conn, NS_API_CONFIG, KEY_HOST)?;
        let port = prefs::get(self.conn, NS_API_CONFIG, KEY_PORT)?;

        if host.is_none() && port.is_none() {
            return Ok(None);
        }

        Ok(Some(Endpoint {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.unwrap_or_else(|| DEFAULT_PORT.to_string()),
        }))
    }
}

/// Parse the bundled endpoint file. Unreadable or empty files degrade to
/// the static defaults; so does any individually missing key.
fn load_env_file(path: &Path) -> Endpoint {
    let mut host: Option<String> = None;
    let mut port: Option<String> = None;

    if let Ok(content) = fs::read_to_string(path) {
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = trimmed.split_once('=') {
                match key.trim() {
                    KEY_HOST => host = Some(value.trim().to_string()),
                    KEY_PORT => port = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }
    }

    Endpoint {
        host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: port.unwrap_or_else(|| DEFAULT_PORT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use std::io::Write;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    fn write_env_file(name: &str, content: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("{}_trashreporter.env", name));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn missing_env_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("{}_trashreporter_missing.env", name));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn bundled_file_wins_when_no_override() {
        let conn = test_conn();
        let env = write_env_file("bundled", "API_HOST=1.2.3.4\nAPI_PORT=9999\n");
        let mut resolver = ConfigResolver::new(&conn, env);

        assert_eq!(resolver.base_url().unwrap(), "http://1.2.3.4:9999/api");
        assert_eq!(resolver.source().unwrap(), ConfigSource::Bundled);
    }

    #[test]
    fn bundled_file_parsing_skips_comments_and_blanks() {
        let conn = test_conn();
        let env = write_env_file(
            "comments",
            "# production endpoint\n\n  API_HOST = 5.5.5.5  \nIGNORED=x\nAPI_PORT=2020\n",
        );
        let mut resolver = ConfigResolver::new(&conn, env);

        let ep = resolver.resolve().unwrap();
        assert_eq!(ep.host, "5.5.5.5");
        assert_eq!(ep.port, "2020");
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let conn = test_conn();
        let env = write_env_file("equals", "API_HOST=a=b\n");
        let mut resolver = ConfigResolver::new(&conn, env);

        assert_eq!(resolver.resolve().unwrap().host, "a=b");
    }

    #[test]
    fn unreadable_bundled_file_degrades_to_defaults() {
        let conn = test_conn();
        let mut resolver = ConfigResolver::new(&conn, missing_env_file("unreadable"));

        assert_eq!(
            resolver.base_url().unwrap(),
            "http://10.208.16.44:2000/api"
        );
    }

    #[test]
    fn empty_bundled_file_degrades_to_defaults() {
        let conn = test_conn();
        let env = write_env_file("empty", "# nothing here\n\n");
        let mut resolver = ConfigResolver::new(&conn, env);

        let ep = resolver.resolve().unwrap();
        assert_eq!(ep.host, DEFAULT_HOST);
        assert_eq!(ep.port, DEFAULT_PORT);
    }

    #[test]
    fn any_override_key_shadows_the_whole_bundled_layer() {
        let conn = test_conn();
        let env = write_env_file("shadow", "API_HOST=1.2.3.4\nAPI_PORT=9999\n");

        // Only the port is overridden: the bundled host must NOT leak
        // through; the host falls back to the static default instead.
        prefs::set(&conn, NS_API_CONFIG, KEY_PORT, "7777").unwrap();

        let mut resolver = ConfigResolver::new(&conn, env);
        let ep = resolver.resolve().unwrap();
        assert_eq!(ep.host, DEFAULT_HOST);
        assert_eq!(ep.port, "7777");
        assert_eq!(resolver.source().unwrap(), ConfigSource::Override);
    }

    #[test]
    fn set_override_applies_default_port() {
        let conn = test_conn();
        let mut resolver = ConfigResolver::new(&conn, missing_env_file("setover"));

        resolver.set_override("5.6.7.8", None).unwrap();

        let ep = resolver.resolve().unwrap();
        assert_eq!(ep.host, "5.6.7.8");
        assert_eq!(ep.port, "2000");
    }

    #[test]
    fn clear_override_returns_authority_to_bundled() {
        let conn = test_conn();
        let env = write_env_file("clearover", "API_HOST=1.2.3.4\n");
        let mut resolver = ConfigResolver::new(&conn, env);

        resolver.set_override("5.6.7.8", Some("3000")).unwrap();
        assert_eq!(resolver.source().unwrap(), ConfigSource::Override);
        assert_eq!(resolver.resolve().unwrap().host, "5.6.7.8");

        resolver.clear_override().unwrap();
        assert_eq!(resolver.source().unwrap(), ConfigSource::Bundled);
        assert_eq!(resolver.resolve().unwrap().host, "1.2.3.4");
    }

    #[test]
    fn cache_is_invalidated_on_override_write() {
        let conn = test_conn();
        let env = write_env_file("cacheinv", "API_HOST=1.2.3.4\n");
        let mut resolver = ConfigResolver::new(&conn, env);

        assert_eq!(resolver.resolve().unwrap().host, "1.2.3.4");
        resolver.set_override("9.9.9.9", None).unwrap();
        assert_eq!(resolver.resolve().unwrap().host, "9.9.9.9");
    }

    #[test]
    fn cache_masks_external_writes_until_invalidated() {
        let conn = test_conn();
        let env = write_env_file("cachemask", "API_HOST=1.2.3.4\n");
        let mut resolver = ConfigResolver::new(&conn, env);

        assert_eq!(resolver.resolve().unwrap().host, "1.2.3.4");

        // A write that bypasses the resolver is not seen...
        prefs::set(&conn, NS_API_CONFIG, KEY_HOST, "8.8.8.8").unwrap();
        assert_eq!(resolver.resolve().unwrap().host, "1.2.3.4");

        // ...until the cache is explicitly dropped.
        resolver.invalidate();
        assert_eq!(resolver.resolve().unwrap().host, "8.8.8.8");
    }
}
