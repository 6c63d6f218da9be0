//! JSON-file preference store.
//!
//! The whole store is a single JSON object of string values. A missing or
//! blank file reads as empty. A corrupt file fails reads, and the next write
//! starts over from an empty object. Writes replace the file through a
//! temporary sibling and a rename.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{Error, Result, StoreError};
use crate::port::outbound::store::PreferenceStore;

/// Preference store persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, String>> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                }
                .into()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(self.io_error(err).into()),
        }
    }

    /// Current entries for a read-modify-write. A corrupt file is discarded.
    async fn load_for_write(&self) -> Result<BTreeMap<String, String>> {
        match self.load().await {
            Err(Error::Store(StoreError::Corrupt { path, source })) => {
                warn!(
                    path = %path.display(),
                    error = %source,
                    "preference file is corrupt; replacing it"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        let body = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).await.map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), keys = entries.len(), "preferences written");
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_write().await?;
        let before = entries.len();
        for key in keys {
            entries.remove(*key);
        }
        if entries.len() == before && !self.path.exists() {
            return Ok(());
        }
        self.persist(&entries).await
    }
}
