//! In-process preference store.
//!
//! Backs ephemeral sessions and tests. Individual keys or all writes can be
//! made to fail so callers' fallback paths can be exercised.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::trace;

use crate::error::{Result, StoreError};
use crate::port::outbound::store::PreferenceStore;

/// Preference store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    failing_keys: Mutex<HashSet<String>>,
    writes_fail: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.lock().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    /// Make every read and write of `key` fail from now on.
    pub fn fail_key(&self, key: &str) {
        self.failing_keys.lock().insert(key.to_string());
    }

    /// Make all writes and removals fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.writes_fail.store(fail, Ordering::SeqCst);
    }

    /// Current value of `key`, bypassing fault injection.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Snapshot of everything stored.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.lock().clone()
    }

    fn check_read(&self, key: &str) -> Result<()> {
        if self.failing_keys.lock().contains(key) {
            return Err(StoreError::Unavailable {
                key: key.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn check_write(&self, key: &str) -> Result<()> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                key: key.to_string(),
            }
            .into());
        }
        self.check_read(key)
    }
}

impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_read(key)?;
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_write(key)?;
        trace!(key, value, "memory store set");
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.check_write(key)?;
        }
        let mut entries = self.entries.lock();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
