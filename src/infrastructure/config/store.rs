//! Preference store configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Which preference store backs the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON file on disk.
    #[default]
    File,
    /// Nothing persists past the process.
    Memory,
}

/// Preference store configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Preference file location. Defaults to the per-user data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
