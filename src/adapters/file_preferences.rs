//! File-based preference store adapter.
//!
//! Preferences live in a single JSON object file, by default
//! `~/.smart-alec/preferences.json` (see [`crate::config::AppConfig`]). The file and its parent directory are
//! created on the first write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PreferenceError;
use crate::traits::PreferenceStore;

/// The preferences directory name.
pub const PREFERENCES_DIR: &str = ".smart-alec";

/// The preferences file name.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// JSON-file backed [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| PreferenceError::Read {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| PreferenceError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let write_err = |e: std::io::Error| PreferenceError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let json = serde_json::to_string_pretty(values).map_err(|e| PreferenceError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, json).map_err(write_err)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(PreferenceError::Corrupt { .. }) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}
