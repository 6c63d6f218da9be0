//! Path utilities for traderisk.
//!
//! All data lives under `~/.traderisk/`:
//! - `~/.traderisk/config.toml` - optional configuration
//! - `~/.traderisk/preferences.json` - saved defaults, theme and tutorial flag

use std::path::PathBuf;

/// Returns the traderisk home directory (`~/.traderisk/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".traderisk")
}

/// Returns the default config file path (`~/.traderisk/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default preference file path (`~/.traderisk/preferences.json`).
pub fn default_store() -> PathBuf {
    home_dir().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_traderisk_home() {
        let config = default_config();
        let store = default_store();

        assert!(home_dir().to_string_lossy().contains(".traderisk"));
        assert!(config.starts_with(home_dir()));
        assert!(store.starts_with(home_dir()));
        assert_eq!(store.extension().and_then(|e| e.to_str()), Some("json"));
    }
}
