//! Moderator dashboard: statistics and the approve/remove actions.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use smart_alec::app::{App, Screen, View};
use smart_alec::input::CommandRegistry;
use smart_alec::models::FlaggedStats;
use smart_alec::state::ModeratorState;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(&CommandRegistry::new(), KeyEvent::new(code, KeyModifiers::NONE));
}

fn moderator(app: &App) -> &ModeratorState {
    match &app.view {
        View::Moderator(state) => state,
        _ => panic!("expected moderator dashboard"),
    }
}

fn flagged_queue() -> serde_json::Value {
    json!([
        comment_json(1, 10, "spammer", "Cheap SPAM here", true),
        comment_json(2, 10, "rude", "You are wrong", true),
        comment_json(3, 11, "bot", "more spam, more spam", true),
    ])
}

async fn open_dashboard(mock: MockHttpClient, actions: bool) -> App {
    let mut app = TestAppBuilder::new(mock)
        .with_config(|c| c.with_moderation_actions(actions))
        .build();
    app.start();
    wait_for(&mut app, |app| !app_is_loading(app)).await;
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.screen(), Screen::Moderator);
    wait_for(&mut app, |app| !app_is_loading(app)).await;
    app
}

#[tokio::test]
async fn test_statistics_from_flagged_set() {
    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .get("/comments/flagged/", flagged_queue())
        .build();
    let app = open_dashboard(mock, false).await;

    assert_eq!(
        moderator(&app).stats(),
        FlaggedStats {
            total: 3,
            potential_spam: 2,
            posts_affected: 2,
        }
    );

    let screen = render_to_string(&app, 100, 40);
    assert!(screen.contains("Flagged Comments"));
    assert!(screen.contains("Potential Spam"));
    assert!(screen.contains("Posts Affected"));
    assert!(screen.contains("On post #10"));
    assert!(screen.contains("On post #11"));
}

#[tokio::test]
async fn test_paginated_flagged_response() {
    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .get(
            "/comments/flagged/",
            json!({"count": 1, "next": null, "previous": null, "results": [
                comment_json(4, 2, "x", "hello", true)
            ]}),
        )
        .build();
    let app = open_dashboard(mock, false).await;
    assert_eq!(moderator(&app).comments().len(), 1);
}

#[tokio::test]
async fn test_empty_and_failed_queue() {
    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .get("/comments/flagged/", json!([]))
        .build();
    let app = open_dashboard(mock, false).await;
    let screen = render_to_string(&app, 100, 30);
    assert!(screen.contains("All clear! No comments flagged for review."));

    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .respond("GET", "/comments/flagged/", MockResponse::Error(HttpError::ConnectionFailed("refused".into())))
        .build();
    let app = open_dashboard(mock, false).await;
    assert_eq!(moderator(&app).stats(), FlaggedStats::default());
    let screen = render_to_string(&app, 100, 30);
    assert!(screen.contains("Failed to load flagged comments."));
    assert!(!screen.contains("refused"));
}

#[tokio::test]
async fn test_actions_disabled_make_no_request() {
    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .get("/comments/flagged/", flagged_queue())
        .build();
    let mut app = open_dashboard(mock.clone(), false).await;
    let before = mock.request_log().len();

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('d'));

    assert_eq!(mock.request_log().len(), before);
    assert_eq!(moderator(&app).comments().len(), 3);
    let screen = render_to_string(&app, 100, 40);
    assert!(screen.contains("Moderation actions are not enabled."));
}

#[tokio::test]
async fn test_approve_and_remove() {
    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .get("/comments/flagged/", flagged_queue())
        .respond(
            "PATCH",
            "/comments/1/",
            MockResponse::json(200, comment_json(1, 10, "spammer", "Cheap SPAM here", false)),
        )
        .respond("DELETE", "/comments/2/", MockResponse::raw(204, ""))
        .build();
    let mut app = open_dashboard(mock.clone(), true).await;

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(moderator(&app).pending, Some(1));
    wait_for(&mut app, |app| moderator(app).pending.is_none()).await;
    assert_eq!(moderator(&app).notice.as_deref(), Some("Comment approved."));
    assert_eq!(moderator(&app).stats().total, 2);

    press(&mut app, KeyCode::Char('d'));
    wait_for(&mut app, |app| moderator(app).pending.is_none()).await;
    assert_eq!(moderator(&app).notice.as_deref(), Some("Comment removed."));
    assert_eq!(
        moderator(&app).stats(),
        FlaggedStats {
            total: 1,
            potential_spam: 1,
            posts_affected: 1,
        }
    );

    let patch = mock
        .get_requests()
        .into_iter()
        .find(|r| r.method == "PATCH")
        .unwrap();
    assert_eq!(patch.json_body(), Some(json!({"flagged": false})));
    assert!(mock
        .request_log()
        .contains(&format!("DELETE {}", url("/comments/2/"))));
}

#[tokio::test]
async fn test_failed_action_keeps_comment() {
    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .get("/comments/flagged/", flagged_queue())
        .respond("DELETE", "/comments/1/", MockResponse::raw(500, ""))
        .build();
    let mut app = open_dashboard(mock, true).await;

    press(&mut app, KeyCode::Char('d'));
    wait_for(&mut app, |app| moderator(app).pending.is_none()).await;
    assert_eq!(moderator(&app).notice.as_deref(), Some("Failed to remove comment."));
    assert_eq!(moderator(&app).comments().len(), 3);
}

#[tokio::test]
async fn test_enter_opens_commented_post() {
    let mock = MockApi::new()
        .get("/posts/", json!([]))
        .get("/comments/flagged/", flagged_queue())
        .get("/posts/10/", post_detail_json(10, "Target", vec![]))
        .build();
    let mut app = open_dashboard(mock, false).await;

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::PostDetail);
    wait_for(&mut app, |app| !app_is_loading(app)).await;
    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("Target"));
}
