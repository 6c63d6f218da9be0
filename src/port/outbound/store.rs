//! Persistence port for user preferences.

use std::future::Future;

use crate::error::Result;

/// String key-value storage for preferences.
///
/// Mirrors a mobile key-value store: values are plain strings, a missing key
/// reads as `None`, and every call may fail independently. Callers treat
/// failures as non-fatal.
pub trait PreferenceStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;

    /// Remove several keys in one call. Missing keys are ignored.
    fn remove(&self, keys: &[&str]) -> impl Future<Output = Result<()>> + Send;
}
