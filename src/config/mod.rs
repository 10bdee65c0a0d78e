use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod resolver;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub env_file: String,
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
    #[serde(default)]
    pub device_id: Option<String>,
}

fn default_cooldown_secs() -> u64 {
    3600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            env_file: Self::env_file_default().to_string_lossy().to_string(),
            cooldown_secs: default_cooldown_secs(),
            device_id: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("trashreporter")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".trashreporter")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trashreporter.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("trashreporter.sqlite")
    }

    /// Return the full path of the bundled endpoint file
    pub fn env_file_default() -> PathBuf {
        Self::config_dir().join("api.env")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file degrades to defaults with a warning rather than
    /// aborting: every command must still be able to run.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    crate::ui::messages::warning(format!(
                        "Malformed config file ({}), using defaults",
                        e
                    ));
                    Config::default()
                }),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, endpoint template and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Write the endpoint template once; edits survive re-init
        let env_path = Self::env_file_default();
        if !is_test && !env_path.exists() {
            let mut file = fs::File::create(&env_path)?;
            file.write_all(ENV_TEMPLATE.as_bytes())?;
            println!("✅ Endpoint file: {:?}", env_path);
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}

const ENV_TEMPLATE: &str = "\
# TrashReporter API endpoint.
# One KEY=VALUE per line; lines starting with '#' are ignored.
# Used unless an override was set with `trashreporter config --host`.
API_HOST=10.208.16.44
API_PORT=2000
";
