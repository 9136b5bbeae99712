//! Application configuration file support.
//!
//! Settings are read from a small TOML file; an absent or malformed file
//! yields the defaults so the application always starts.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::db::RepositoryType;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub sqlite: SqliteSettings,
}

/// Display-facing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Repository backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_backend")]
    pub backend: String,
}

/// SQLite database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteSettings {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_app_name() -> String {
    "Gimnasio Pro".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_backend() -> String {
    "sqlite".to_string()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("data/gimnasio.db")
}

fn default_busy_timeout_ms() -> u64 {
    5_000
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            theme: default_theme(),
        }
    }
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

impl Default for SqliteSettings {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            repository: RepositorySettings::default(),
            sqlite: SqliteSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// An absent or malformed file is not an error: the defaults are
    /// returned and a warning is logged.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                warn!(path = %path.display(), "config file not found, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured backend, falling back to SQLite on an unknown value.
    pub fn repository_type(&self) -> RepositoryType {
        RepositoryType::from_str(&self.repository.backend).unwrap_or(RepositoryType::Sqlite)
    }

    /// SQLite backend configuration derived from the settings file.
    #[cfg(feature = "sqlite-repo")]
    pub fn sqlite_config(&self) -> crate::db::SqliteConfig {
        let mut config = crate::db::SqliteConfig::new(self.sqlite.path.clone());
        config.busy_timeout_ms = self.sqlite.busy_timeout_ms;
        config
    }
}
