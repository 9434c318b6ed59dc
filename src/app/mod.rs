//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] / [`View`] - which screen is displayed and its state
//! - [`AppMessage`] - completions of async work
//!
//! Data flows one way per screen: navigation mounts a fresh view with a new
//! [`ViewToken`](crate::state::ViewToken) and spawns its fetch; the fetch
//! reports back through the message channel; [`App::handle_message`] applies
//! it only if the view is still mounted.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, View};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::state::{AppContext, PostListState, ViewLifetimes};

/// Main application state
pub struct App {
    /// Configuration and theme
    pub context: AppContext,
    /// API client shared with spawned tasks
    pub client: Arc<ApiClient>,
    /// The mounted screen
    pub view: View,
    lifetimes: ViewLifetimes,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Receiver for async messages (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Dirty flag: set on state mutations, cleared after each draw
    pub needs_redraw: bool,
}

impl App {
    /// Create the app on the post list. No request is made until
    /// [`App::start`].
    pub fn new(context: AppContext, client: Arc<ApiClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let mut lifetimes = ViewLifetimes::new();
        let view = View::PostList(PostListState::new(lifetimes.mount()));

        Self {
            context,
            client,
            view,
            lifetimes,
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
        }
    }

    /// Issue the initial screen's fetch. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        if let View::PostList(state) = &self.view {
            let token = state.token;
            self.spawn_fetch_posts(token, None);
        }
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick. Only loading states animate.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() && self.tick_count % 8 == 0 {
            self.mark_dirty();
        }
    }

    fn is_busy(&self) -> bool {
        match &self.view {
            View::PostList(state) => state.posts.is_loading(),
            View::PostDetail(state) => {
                state.post.is_loading() || state.refreshing || state.form.is_locked()
            }
            View::Moderator(state) => state.flagged.is_loading() || state.pending.is_some(),
        }
    }

    /// Wait for one message and handle it. Returns false once the channel is
    /// closed or has been taken by the main loop.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        let msg = rx.recv().await;
        match msg {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn toggle_theme(&mut self) {
        let dark = self.context.toggle_theme();
        tracing::info!(dark, "theme toggled");
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryPreferences, MockHttpClient};
    use crate::config::AppConfig;
    use crate::state::ThemeState;

    fn create_test_app() -> App {
        let prefs = Arc::new(InMemoryPreferences::new());
        let context = AppContext::new(AppConfig::default(), ThemeState::init(prefs, true));
        let client = ApiClient::new("http://api.test/api", Arc::new(MockHttpClient::new()));
        App::new(context, Arc::new(client))
    }

    #[test]
    fn test_app_starts_on_post_list() {
        let app = create_test_app();
        assert_eq!(app.screen(), Screen::PostList);
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tick_redraws_only_while_busy() {
        let mut app = create_test_app();
        app.needs_redraw = false;
        for _ in 0..8 {
            app.tick();
        }
        assert!(app.needs_redraw);

        if let View::PostList(state) = &mut app.view {
            state.apply_failed();
        }
        app.needs_redraw = false;
        for _ in 0..16 {
            app.tick();
        }
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = create_test_app();
        assert!(app.context.theme().is_dark());
        app.toggle_theme();
        assert!(!app.context.theme().is_dark());
    }

    #[tokio::test]
    async fn test_process_next_message_without_receiver() {
        let mut app = create_test_app();
        app.message_rx = None;
        assert!(!app.process_next_message().await);
    }
}
