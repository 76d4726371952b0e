//! # Session Configuration
//!
//! Where the session keeps its documents and how the pool is sized.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BREW_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use brew_db::DbConfig;

/// Database file name inside the data directory.
const DB_FILE_NAME: &str = "brew.db";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// SQLite file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Keep documents in process memory instead of SQLite.
    pub in_memory: bool,

    pub max_connections: u32,

    pub connect_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            database_path: None,
            in_memory: false,
            max_connections: 5,
            connect_timeout_secs: 30,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `BREW_DB_PATH`: SQLite file path
    /// - `BREW_IN_MEMORY`: `1`/`true` for the in-memory store
    /// - `BREW_MAX_CONNECTIONS`: pool size
    /// - `BREW_CONNECT_TIMEOUT_SECS`: connection timeout
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numbers are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(path) = lookup("BREW_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("BREW_IN_MEMORY") {
            config.in_memory = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true");
        }

        if let Some(raw) = lookup("BREW_MAX_CONNECTIONS") {
            match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => config.max_connections = n,
                _ => warn!(value = %raw, "Ignoring invalid BREW_MAX_CONNECTIONS"),
            }
        }

        if let Some(raw) = lookup("BREW_CONNECT_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.connect_timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid BREW_CONNECT_TIMEOUT_SECS"),
            }
        }

        config
    }

    /// Resolves the database file path, creating its directory if needed.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.brew.mug/brew.db`
    /// - **Windows**: `%APPDATA%\brew\mug\data\brew.db`
    /// - **Linux**: `~/.local/share/mug/brew.db`
    ///
    /// Falls back to `./brew.db` when no home directory can be found.
    pub fn resolve_database_path(&self) -> std::io::Result<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        match ProjectDirs::from("com", "brew", "mug") {
            Some(dirs) => {
                let data_dir = dirs.data_dir();
                std::fs::create_dir_all(data_dir)?;
                Ok(data_dir.join(DB_FILE_NAME))
            }
            None => Ok(PathBuf::from(DB_FILE_NAME)),
        }
    }

    /// Builds the pool configuration for a resolved path.
    pub fn db_config(&self, path: PathBuf) -> DbConfig {
        DbConfig::new(path)
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}
