use crate::db::QueryFilters;
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `mysql.password`.
pub const PASSWORD_ENV: &str = "PTPDASH_DB_PASSWORD";

/// Top-level keys written by `init`; `config --check` reports the missing ones.
pub const CONFIG_KEYS: [&str; 8] = [
    "store",
    "mysql",
    "sqlite_path",
    "client_segment",
    "agent",
    "cache_ttl_secs",
    "export_file",
    "log_level",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Mysql,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MySqlSettings {
    pub host: String,
    #[serde(default = "default_mysql_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
}

impl Default for MySqlSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: default_mysql_port(),
            user: "usr4mis".to_string(),
            password: String::new(),
            database: "volare".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreKind,
    #[serde(default)]
    pub mysql: MySqlSettings,
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,
    #[serde(default = "default_client_segment")]
    pub client_segment: String,
    #[serde(default = "default_agent")]
    pub agent: String,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_mysql_port() -> u16 {
    3307
}
fn default_sqlite_path() -> String {
    Config::config_dir()
        .join("snapshot.sqlite")
        .to_string_lossy()
        .to_string()
}
fn default_client_segment() -> String {
    "BPI CARDS XDAYS".to_string()
}
fn default_agent() -> String {
    "GTCUSTODIO".to_string()
}
fn default_cache_ttl() -> u64 {
    600
}
fn default_export_file() -> String {
    "PTP_and_Agent_Posted_Payments.xlsx".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            mysql: MySqlSettings::default(),
            sqlite_path: default_sqlite_path(),
            client_segment: default_client_segment(),
            agent: default_agent(),
            cache_ttl_secs: default_cache_ttl(),
            export_file: default_export_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.ptpdash`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ptpdash")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ptpdash.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    /// The password environment variable is applied on top in both cases.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?
        } else {
            Config::default()
        };

        if let Ok(pw) = env::var(PASSWORD_ENV) {
            cfg.mysql.password = pw;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.agent.trim().is_empty() {
            return Err(AppError::Config("`agent` must not be empty".into()));
        }
        if self.client_segment.trim().is_empty() {
            return Err(AppError::Config("`client_segment` must not be empty".into()));
        }
        if self.cache_ttl_secs == 0 {
            return Err(AppError::Config("`cache_ttl_secs` must be greater than 0".into()));
        }
        Ok(())
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn write_default(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let cfg = Config::default();
        fs::write(path, cfg.to_yaml()?)?;
        Ok(cfg)
    }

    /// Serialized form without the password, for printing.
    pub fn to_redacted_yaml(&self) -> AppResult<String> {
        let mut shown = self.clone();
        if !shown.mysql.password.is_empty() {
            shown.mysql.password = "********".into();
        }
        shown.to_yaml()
    }

    fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Top-level keys absent from a config file's content.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))?;

        let Some(map) = value.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn filters(&self) -> QueryFilters {
        QueryFilters {
            client_segment: self.client_segment.clone(),
            agent: self.agent.clone(),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
