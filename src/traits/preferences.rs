//! Local preference storage abstraction.
//!
//! A tiny string key-value store that survives restarts. The only value
//! stored today is the theme flag, serialized as JSON.

use crate::error::PreferenceError;

/// Trait for persisted client-side preferences.
///
/// Values are opaque strings; callers decide the encoding. Implementations
/// must be cheap enough to call from the UI thread on every change.
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if nothing has been stored under `key`
    /// - `Err(error)` if the backing storage could not be read
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
