//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::*;
//!
//! let mock = MockApi::new().get("/posts/", json!([])).build();
//! let mut app = TestAppBuilder::new(mock.clone()).build();
//! app.start();
//! wait_for(&mut app, |app| !app_is_loading(app)).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};

use smart_alec::api::ApiClient;
use smart_alec::app::{App, View};
use smart_alec::config::AppConfig;
use smart_alec::state::{AppContext, ThemeState};
use smart_alec::traits::PreferenceStore;

/// Builder for test App instances backed by a mock HTTP client.
pub struct TestAppBuilder {
    http: MockHttpClient,
    config: AppConfig,
    prefs: Arc<dyn PreferenceStore>,
    platform_dark: bool,
}

impl TestAppBuilder {
    pub fn new(http: MockHttpClient) -> Self {
        Self {
            http,
            config: AppConfig::default().with_success_reset_delay(Duration::from_millis(20)),
            prefs: Arc::new(InMemoryPreferences::new()),
            platform_dark: true,
        }
    }

    pub fn with_config(mut self, f: impl FnOnce(AppConfig) -> AppConfig) -> Self {
        self.config = f(self.config);
        self
    }

    pub fn with_preferences(mut self, prefs: Arc<dyn PreferenceStore>) -> Self {
        self.prefs = prefs;
        self
    }

    pub fn with_platform_dark(mut self, dark: bool) -> Self {
        self.platform_dark = dark;
        self
    }

    pub fn build(self) -> App {
        let theme = ThemeState::init(self.prefs, self.platform_dark);
        let context = AppContext::new(self.config, theme);
        let client = ApiClient::new(API, Arc::new(self.http));
        App::new(context, Arc::new(client))
    }
}

/// Handle messages until `done` holds. Panics after two seconds.
pub async fn wait_for(app: &mut App, done: impl Fn(&App) -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !done(app) {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        match tokio::time::timeout(remaining, app.process_next_message()).await {
            Ok(true) => {}
            Ok(false) => panic!("message channel closed"),
            Err(_) => panic!("timed out waiting for app state"),
        }
    }
}

pub fn app_is_loading(app: &App) -> bool {
    match &app.view {
        View::PostList(state) => state.posts.is_loading(),
        View::PostDetail(state) => state.post.is_loading() || state.refreshing,
        View::Moderator(state) => state.flagged.is_loading(),
    }
}

/// Render the app and return the screen as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| smart_alec::ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
