//! Moderation API client.
//!
//! Wraps an [`HttpClient`] with the resource operations of the posts and
//! comments API. Each operation issues exactly one request; there is no
//! retry, caching or request de-duplication.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{normalize_listing, Comment, CreateComment, Listing, NewPost, Post};
use crate::traits::{Headers, HttpClient, Response};

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Client for the posts/comments moderation API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over any [`HttpClient`].
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Create a client backed by reqwest.
    pub fn with_reqwest(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// The normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL from an API path such as `/posts/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
        serde_json::to_string(body).map_err(|e| ApiError::Decode {
            resource: "request body",
            message: e.to_string(),
        })
    }

    /// Reject non-2xx responses and parse the body as JSON.
    ///
    /// An empty 2xx body parses as `null`.
    fn into_json(response: Response, resource: &'static str) -> ApiResult<Value> {
        if !response.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status,
                body,
            });
        }
        if response.body.is_empty() {
            return Ok(Value::Null);
        }
        response.json().map_err(|e| ApiError::Decode {
            resource,
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(value: Value, resource: &'static str) -> ApiResult<T> {
        serde_json::from_value(value).map_err(|e| ApiError::Decode {
            resource,
            message: e.to_string(),
        })
    }

    async fn get_json(&self, path: &str, resource: &'static str) -> ApiResult<Value> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url, &Self::json_headers()).await?;
        Self::into_json(response, resource)
    }

    async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> ApiResult<Listing<T>> {
        let value = self.get_json(path, resource).await?;
        Ok(normalize_listing(value, resource))
    }

    /// `GET /posts/`
    pub async fn list_posts(&self) -> ApiResult<Listing<Post>> {
        self.get_listing("/posts/", "posts").await
    }

    /// `GET /posts/?search=<query>`; the server matches title and body.
    pub async fn search_posts(&self, query: &str) -> ApiResult<Listing<Post>> {
        let path = format!("/posts/?search={}", urlencoding::encode(query));
        self.get_listing(&path, "posts").await
    }

    /// `GET /posts/{id}/`, including nested comments.
    ///
    /// Returns `Ok(None)` when the request succeeded but the body is not a
    /// usable post object.
    pub async fn get_post(&self, id: u64) -> ApiResult<Option<Post>> {
        let value = self.get_json(&format!("/posts/{}/", id), "post").await?;
        if !value.is_object() {
            tracing::warn!(post_id = id, "post response is not an object");
            return Ok(None);
        }
        match serde_json::from_value(value) {
            Ok(post) => Ok(Some(post)),
            Err(e) => {
                tracing::warn!(post_id = id, error = %e, "post response is not a usable post");
                Ok(None)
            }
        }
    }

    /// `POST /posts/`
    pub async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        let url = self.url("/posts/");
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url, &Self::encode(post)?, &Self::json_headers())
            .await?;
        Self::decode(Self::into_json(response, "post")?, "post")
    }

    /// `GET /comments/`, optionally `?post=<id>`.
    pub async fn list_comments(&self, post_id: Option<u64>) -> ApiResult<Listing<Comment>> {
        let path = match post_id {
            Some(id) => format!("/comments/?post={}", id),
            None => "/comments/".to_string(),
        };
        self.get_listing(&path, "comments").await
    }

    /// `GET /comments/flagged/`
    pub async fn list_flagged(&self) -> ApiResult<Listing<Comment>> {
        self.get_listing("/comments/flagged/", "flagged comments")
            .await
    }

    /// `POST /comments/`
    pub async fn create_comment(&self, comment: &CreateComment) -> ApiResult<Comment> {
        let url = self.url("/comments/");
        tracing::debug!(%url, post_id = comment.post, "POST");
        let response = self
            .http
            .post(&url, &Self::encode(comment)?, &Self::json_headers())
            .await?;
        Self::decode(Self::into_json(response, "comment")?, "comment")
    }

    /// `PATCH /comments/{id}/` with `{"flagged": false}`.
    pub async fn approve_comment(&self, id: u64) -> ApiResult<Comment> {
        let url = self.url(&format!("/comments/{}/", id));
        tracing::debug!(%url, "PATCH");
        let body = serde_json::json!({ "flagged": false }).to_string();
        let response = self.http.patch(&url, &body, &Self::json_headers()).await?;
        Self::decode(Self::into_json(response, "comment")?, "comment")
    }

    /// `DELETE /comments/{id}/`
    pub async fn remove_comment(&self, id: u64) -> ApiResult<()> {
        let url = self.url(&format!("/comments/{}/", id));
        tracing::debug!(%url, "DELETE");
        let response = self.http.delete(&url, &Self::json_headers()).await?;
        Self::into_json(response, "comment").map(|_| ())
    }
}
