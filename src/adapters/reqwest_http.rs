//! Production [`HttpClient`] backed by reqwest.
//!
//! No timeout is set: a hung request leaves the requesting screen in its
//! loading state until the user navigates away.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::traits::{Headers, HttpClient, HttpError, Response};

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    fn convert_error(err: reqwest::Error) -> HttpError {
        let detail = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(detail)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(detail)
        } else if err.is_builder() {
            HttpError::InvalidUrl(detail)
        } else {
            HttpError::Other(detail)
        }
    }

    /// Lowercased names; values that are not visible ASCII are skipped.
    fn convert_headers(map: &HeaderMap) -> Headers {
        let mut headers = Headers::with_capacity(map.len());
        for (name, value) in map {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }
        headers
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let mut request = self.client.request(method.clone(), url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body.to_owned());
        }

        tracing::debug!(%method, url, "sending request");
        let reply = request.send().await.map_err(Self::convert_error)?;
        let status = reply.status().as_u16();
        let reply_headers = Self::convert_headers(reply.headers());
        let bytes = reply.bytes().await.map_err(Self::convert_error)?;
        tracing::debug!(%method, url, status, len = bytes.len(), "response received");

        Ok(Response::with_headers(status, reply_headers, bytes))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(Method::GET, url, None, headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(Method::POST, url, Some(body), headers).await
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(Method::PATCH, url, Some(body), headers).await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(Method::DELETE, url, None, headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_convert_headers_lowercases() {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        map.insert("X-Total-Count", HeaderValue::from_static("12"));

        let headers = ReqwestHttpClient::convert_headers(&map);
        assert_eq!(headers.get("content-type").map(String::as_str), Some("application/json"));
        assert_eq!(headers.get("x-total-count").map(String::as_str), Some("12"));
    }

    #[tokio::test]
    async fn test_relative_url_is_rejected() {
        let result = ReqwestHttpClient::new().get("/api/posts/", &Headers::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let result = ReqwestHttpClient::new()
            .patch(
                "http://127.0.0.1:59999/api/comments/1/",
                r#"{"flagged":false}"#,
                &Headers::new(),
            )
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }
}
