//! Scripted [`HttpClient`] for tests.
//!
//! Replies are keyed on `(METHOD, url)`. Several replies may be queued for one
//! key: they are served in order and the last one sticks. Every call is
//! recorded, including calls that found no reply.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Present for POST and PATCH.
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.body.as_deref()?).ok()
    }
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status, 2xx or not.
    Success(Response),
    /// No response at all.
    Error(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        Self::Success(Response::json_body(status, &value))
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self::Success(Response::new(status, Bytes::copy_from_slice(body.as_bytes())))
    }

    fn into_result(self) -> Result<Response, HttpError> {
        match self {
            Self::Success(response) => Ok(response),
            Self::Error(err) => Err(err),
        }
    }
}

#[derive(Debug, Default)]
struct Script {
    replies: HashMap<(String, String), VecDeque<MockResponse>>,
    fallback: Option<MockResponse>,
    log: Vec<RecordedRequest>,
}

impl Script {
    fn reply_for(&mut self, method: &str, url: &str) -> Option<MockResponse> {
        let queued = self
            .replies
            .get_mut(&(method.to_string(), url.to_string()))
            .and_then(|queue| match queue.len() {
                0 => None,
                1 => queue.front().cloned(),
                _ => queue.pop_front(),
            });
        queued.or_else(|| self.fallback.clone())
    }
}

/// Clones share one script, so a test can keep a handle after giving the
/// client to the app.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is queued for `method url` with a single reply.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        let key = (method.to_uppercase(), url.to_string());
        self.script.lock().unwrap().replies.insert(key, VecDeque::from([response]));
    }

    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        let key = (method.to_uppercase(), url.to_string());
        self.script
            .lock()
            .unwrap()
            .replies
            .entry(key)
            .or_default()
            .push_back(response);
    }

    /// Reply used when nothing is queued for a request.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script.lock().unwrap().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script.lock().unwrap().log.clone()
    }

    /// `"METHOD url"` per recorded request, oldest first.
    pub fn request_log(&self) -> Vec<String> {
        let script = self.script.lock().unwrap();
        script.log.iter().map(|r| format!("{} {}", r.method, r.url)).collect()
    }

    pub fn clear_requests(&self) {
        self.script.lock().unwrap().log.clear();
    }

    fn handle(&self, method: &str, url: &str, headers: &Headers, body: Option<&str>) -> Result<Response, HttpError> {
        let mut script = self.script.lock().unwrap();
        script.log.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });
        match script.reply_for(method, url) {
            Some(reply) => reply.into_result(),
            None => Err(HttpError::Other(format!("unscripted request: {} {}", method, url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, headers, None)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, headers, Some(body))
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("PATCH", url, headers, Some(body))
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("DELETE", url, headers, None)
    }
}
