//! Preference store adapters.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::port::outbound::store::PreferenceStore;

/// Store chosen at startup from configuration and flags.
#[derive(Debug)]
pub enum ConfiguredStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl ConfiguredStore {
    /// Short description for status lines.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(store) => store.path().display().to_string(),
            Self::Memory(_) => "memory (not persisted)".to_string(),
        }
    }
}

impl PreferenceStore for ConfiguredStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::File(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::File(store) => store.set(key, value).await,
            Self::Memory(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        match self {
            Self::File(store) => store.remove(keys).await,
            Self::Memory(store) => store.remove(keys).await,
        }
    }
}
