//! Errors raised by preference storage.

use std::path::PathBuf;
use thiserror::Error;

/// Preference storage failure.
#[derive(Debug, Clone, Error)]
pub enum PreferenceError {
    /// The backing file exists but could not be read.
    #[error("failed to read preferences from {path:?}: {message}")]
    Read { path: PathBuf, message: String },

    /// The backing file could not be written.
    #[error("failed to write preferences to {path:?}: {message}")]
    Write { path: PathBuf, message: String },

    /// The backing file is not a JSON object of strings.
    #[error("preferences file {path:?} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}
