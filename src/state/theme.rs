//! Light/dark theme preference.
//!
//! Initialized once from the preference store (key `darkMode`, JSON bool) or,
//! when nothing valid is stored, from the terminal's reported background.
//! Every change is persisted immediately. Persistence failures are logged and
//! otherwise ignored; the in-memory flag stays authoritative for the session.

use std::sync::Arc;

use crate::traits::PreferenceStore;
use crate::ui::theme::Palette;

/// Preference store key holding the theme flag.
pub const THEME_KEY: &str = "darkMode";

/// Terminal variable describing foreground/background palette indices.
const COLORFGBG: &str = "COLORFGBG";

/// Whether the terminal reports a dark background.
pub fn platform_prefers_dark() -> bool {
    detect_from(std::env::var(COLORFGBG).ok().as_deref())
}

/// Interpret a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
///
/// The last field is the background index. Indices 0-6 and 8 are dark.
/// Missing or unparseable values count as dark.
pub fn detect_from(colorfgbg: Option<&str>) -> bool {
    let Some(value) = colorfgbg else {
        return true;
    };
    match value.rsplit(';').next().map(str::trim).map(str::parse::<u8>) {
        Some(Ok(bg)) => bg <= 6 || bg == 8,
        _ => true,
    }
}

/// Process-wide theme flag backed by a [`PreferenceStore`].
pub struct ThemeState {
    dark: bool,
    store: Arc<dyn PreferenceStore>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState").field("dark", &self.dark).finish()
    }
}

impl ThemeState {
    /// Load the stored flag, else use `platform_dark`, and persist the result.
    pub fn init(store: Arc<dyn PreferenceStore>, platform_dark: bool) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => Some(dark),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "ignoring invalid stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme preference");
                None
            }
        };

        let dark = stored.unwrap_or(platform_dark);
        tracing::debug!(dark, from_store = stored.is_some(), "theme initialized");

        let theme = Self { dark, store };
        theme.persist();
        theme
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the flag. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_dark(!self.dark);
        self.dark
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
        self.persist();
    }

    /// Palette for the current flag.
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.dark)
    }

    fn persist(&self) {
        let value = if self.dark { "true" } else { "false" };
        if let Err(e) = self.store.set(THEME_KEY, value) {
            tracing::warn!(error = %e, "could not persist theme preference");
        }
    }
}
