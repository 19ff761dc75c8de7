//! Database configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the SQLite store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file path. Default: `skillup.db` in the project root.
    pub path: Option<PathBuf>,
    /// Read pool size. Default: 4, capped at 8.
    pub read_pool_size: Option<usize>,
}

impl DatabaseConfig {
    /// Returns the effective database path, defaulting to `skillup.db`.
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from("skillup.db"))
    }
}
