//! Tracing subscriber setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file
//! (`~/.smart-alec/smart-alec.log` by default) instead of stderr.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "SMART_ALEC_LOG";

/// Filter used when `SMART_ALEC_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

fn filter_from_env() -> EnvFilter {
    match std::env::var(ENV_LOG) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive.trim())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        _ => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}

/// Install the global subscriber writing to `config.log_path`.
///
/// Logging is optional: if the log file cannot be opened, or a subscriber
/// is already installed, this returns `false` and the app runs without logs.
/// Safe to call more than once.
pub fn init_logging(config: &AppConfig) -> bool {
    if let Some(parent) = config.log_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
    {
        Ok(file) => file,
        Err(_) => return false,
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_logging_creates_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("app.log");
        let config = AppConfig::default().with_log_path(&path);

        init_logging(&config);
        assert!(path.exists());

        // A second install never succeeds once a global subscriber exists.
        assert!(!init_logging(&config));
    }

    #[test]
    #[serial]
    fn test_invalid_filter_falls_back() {
        std::env::set_var(ENV_LOG, "smart_alec=notalevel");
        let filter = filter_from_env();
        std::env::remove_var(ENV_LOG);
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }
}
