//! HTTP seam used by the API client.
//!
//! The moderation API needs four verbs. Implementations only move bytes:
//! a non-2xx answer is still `Ok(Response)`, and deciding what a status
//! means is left to [`crate::api::ApiClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

pub type Headers = HashMap<String, String>;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Header names are lowercase.
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A response carrying `value` as a JSON body.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        let headers = Headers::from([("content-type".to_string(), "application/json".to_string())]);
        Self::with_headers(status, headers, Bytes::from(value.to_string()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The request did not produce a response.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("could not connect: {0}")]
    ConnectionFailed(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Other(String),
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body() {
        let response = Response::json_body(201, &serde_json::json!({"id": 3}));
        assert_eq!(response.status, 201);
        assert_eq!(
            response.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.text().unwrap(), r#"{"id":3}"#);
    }

    #[test]
    fn test_success_range() {
        for status in [200, 201, 204] {
            assert!(Response::new(status, Bytes::new()).is_success());
        }
        for status in [199, 301, 404, 500] {
            assert!(!Response::new(status, Bytes::new()).is_success());
        }
    }

    #[test]
    fn test_json_decode() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Flag {
            flagged: bool,
        }

        let response = Response::new(200, Bytes::from(r#"{"flagged":false}"#));
        assert_eq!(response.json::<Flag>().unwrap(), Flag { flagged: false });
        assert!(Response::new(200, Bytes::from("nope")).json::<Flag>().is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "could not connect: refused"
        );
        assert_eq!(
            HttpError::Timeout("30s".to_string()).to_string(),
            "request timed out: 30s"
        );
    }
}
