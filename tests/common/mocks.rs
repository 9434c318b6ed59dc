//! Mock HTTP fixtures for the moderation API.

pub use smart_alec::adapters::mock::{InMemoryPreferences, MockHttpClient, MockResponse};
pub use smart_alec::traits::HttpError;

use serde_json::{json, Value};

pub const API: &str = "http://api.test/api";

pub fn url(path: &str) -> String {
    format!("{}{}", API, path)
}

pub fn post_json(id: u64, title: &str, comment_count: u32, flagged: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "body": format!("Body of {}", title),
        "created_at": "2024-01-01T00:00:00Z",
        "comment_count": comment_count,
        "flagged_comment_count": flagged,
    })
}

pub fn comment_json(id: u64, post: u64, author: &str, text: &str, flagged: bool) -> Value {
    json!({
        "id": id,
        "post": post,
        "author": author,
        "text": text,
        "flagged": flagged,
        "created_at": "2024-01-02T10:30:00Z",
    })
}

pub fn post_detail_json(id: u64, title: &str, comments: Vec<Value>) -> Value {
    let flagged = comments
        .iter()
        .filter(|c| c["flagged"].as_bool().unwrap_or(false))
        .count();
    json!({
        "id": id,
        "title": title,
        "body": format!("Body of {}", title),
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "comment_count": comments.len(),
        "flagged_comment_count": flagged,
        "comments": comments,
    })
}

/// Builder for a [`MockHttpClient`] scripted against [`API`].
pub struct MockApi {
    client: MockHttpClient,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    pub fn get(self, path: &str, body: Value) -> Self {
        self.client.set_response("GET", &url(path), MockResponse::json(200, body));
        self
    }

    /// Queue a further GET response for the same path.
    pub fn then_get(self, path: &str, body: Value) -> Self {
        self.client.push_response("GET", &url(path), MockResponse::json(200, body));
        self
    }

    pub fn respond(self, method: &str, path: &str, response: MockResponse) -> Self {
        self.client.set_response(method, &url(path), response);
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}
