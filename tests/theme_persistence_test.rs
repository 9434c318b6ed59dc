//! Theme flag: platform default, toggling, and persistence across runs.

mod common;

use std::sync::Arc;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tempfile::TempDir;

use smart_alec::adapters::FilePreferenceStore;
use smart_alec::app::App;
use smart_alec::input::CommandRegistry;
use smart_alec::state::theme::THEME_KEY;
use smart_alec::traits::PreferenceStore;

fn app_with_store(store: Arc<dyn PreferenceStore>, platform_dark: bool) -> App {
    let mock = MockApi::new().get("/posts/", json!([])).build();
    TestAppBuilder::new(mock)
        .with_preferences(store)
        .with_platform_dark(platform_dark)
        .build()
}

#[test]
fn test_platform_default_is_persisted() {
    let dir = TempDir::new().unwrap();
    let store = FilePreferenceStore::new(dir.path().join("preferences.json"));

    let app = app_with_store(Arc::new(store.clone()), false);
    assert!(!app.context.theme().is_dark());
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("false"));
}

#[test]
fn test_toggle_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    let mut app = app_with_store(Arc::new(FilePreferenceStore::new(&path)), true);
    assert!(app.context.theme().is_dark());
    app.handle_key(
        &CommandRegistry::new(),
        KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
    );
    assert!(!app.context.theme().is_dark());
    let screen = render_to_string(&app, 80, 20);
    assert!(screen.contains("Light"));

    // A second run ignores the platform default in favor of the stored flag.
    let app = app_with_store(Arc::new(FilePreferenceStore::new(&path)), true);
    assert!(!app.context.theme().is_dark());
}

#[test]
fn test_ctrl_t_toggles_from_any_context() {
    let mut app = app_with_store(Arc::new(InMemoryPreferences::new()), true);
    app.handle_key(
        &CommandRegistry::new(),
        KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
    );
    // In the search prompt a plain 't' is text, Ctrl+T still toggles.
    app.handle_key(
        &CommandRegistry::new(),
        KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
    );
    assert!(app.context.theme().is_dark());
    app.handle_key(
        &CommandRegistry::new(),
        KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
    );
    assert!(!app.context.theme().is_dark());
}

#[test]
fn test_invalid_stored_value_falls_back_to_platform() {
    let store = InMemoryPreferences::with_value(THEME_KEY, "\"sometimes\"");
    let app = app_with_store(Arc::new(store.clone()), false);
    assert!(!app.context.theme().is_dark());
    assert_eq!(store.raw(THEME_KEY).as_deref(), Some("false"));
}

#[test]
fn test_write_failure_keeps_session_flag() {
    let store = InMemoryPreferences::new();
    let mut app = app_with_store(Arc::new(store.clone()), true);
    store.fail_writes(true);

    app.toggle_theme();
    assert!(!app.context.theme().is_dark());
    assert_eq!(store.raw(THEME_KEY).as_deref(), Some("true"));
}
