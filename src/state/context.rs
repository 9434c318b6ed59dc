//! Application-wide context handed to the [`App`](crate::app::App) at
//! construction.
//!
//! The theme flag is only reachable through an `AppContext`, so there is no
//! way to read or change it from outside the application's scope.

use crate::config::AppConfig;

use super::theme::ThemeState;

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    theme: ThemeState,
}

impl AppContext {
    pub fn new(config: AppConfig, theme: ThemeState) -> Self {
        Self { config, theme }
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// The single mutator for the theme flag.
    pub fn toggle_theme(&mut self) -> bool {
        self.theme.toggle()
    }
}
