//! In-memory preference store for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::PreferenceError;
use crate::traits::PreferenceStore;

/// Preference store backed by a shared map.
///
/// Clones share the same map, so a test can hand one clone to the code under
/// test and inspect the other. `fail_writes` simulates a read-only disk.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent `set` fail.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Raw access to a stored value.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(PreferenceError::Write {
                path: "<memory>".into(),
                message: "writes disabled".to_string(),
            });
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
