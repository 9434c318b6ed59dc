//! Runtime configuration.
//!
//! Built from defaults, then environment variables, then command-line
//! overrides (applied by `main`).
//!
//! # Example
//!
//! ```ignore
//! use smart_alec::config::AppConfig;
//!
//! let config = AppConfig::from_env()
//!     .with_api_base_url("http://staging.example.com/api")
//!     .with_moderation_actions(true);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::file_preferences::{PREFERENCES_DIR, PREFERENCES_FILE};
use crate::api::DEFAULT_API_URL;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "SMART_ALEC_API_URL";

/// Environment variable enabling approve/remove on the moderator dashboard.
pub const ENV_MODERATION_ACTIONS: &str = "SMART_ALEC_MODERATION_ACTIONS";

/// Log file name inside the preferences directory.
pub const LOG_FILE: &str = "smart-alec.log";

/// How long "Comment submitted successfully!" stays before the form resets.
pub const DEFAULT_SUCCESS_RESET_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the moderation API, without a trailing slash
    pub api_base_url: String,
    /// JSON file holding persisted preferences
    pub preferences_path: PathBuf,
    /// File receiving tracing output
    pub log_path: PathBuf,
    /// Delay between a successful comment submission and the form reset
    pub success_reset_delay: Duration,
    /// Wire approve/remove on the moderator dashboard to the API
    pub moderation_actions: bool,
}

fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(PREFERENCES_DIR))
        .unwrap_or_else(|| PathBuf::from(PREFERENCES_DIR))
}

impl Default for AppConfig {
    fn default() -> Self {
        let dir = data_dir();
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            preferences_path: dir.join(PREFERENCES_FILE),
            log_path: dir.join(LOG_FILE),
            success_reset_delay: DEFAULT_SUCCESS_RESET_DELAY,
            moderation_actions: false,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is removed.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = path.into();
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    pub fn with_success_reset_delay(mut self, delay: Duration) -> Self {
        self.success_reset_delay = delay;
        self
    }

    pub fn with_moderation_actions(mut self, enabled: bool) -> Self {
        self.moderation_actions = enabled;
        self
    }

    /// Defaults overridden by `SMART_ALEC_API_URL` and
    /// `SMART_ALEC_MODERATION_ACTIONS`. Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            let url = url.trim();
            if !url.is_empty() {
                config = config.with_api_base_url(url);
            }
        }

        if let Ok(flag) = std::env::var(ENV_MODERATION_ACTIONS) {
            config = config.with_moderation_actions(parse_flag(&flag));
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
