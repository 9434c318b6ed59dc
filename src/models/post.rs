//! Post resource.

use serde::{Deserialize, Serialize};

use super::comment::Comment;

/// A top-level content item that owns zero or more comments.
///
/// `comment_count` and `flagged_comment_count` are computed by the server.
/// They are displayed as-is and never recomputed from `comments`, which is
/// only present when a post is fetched individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub created_at: String,
    /// Omitted by the list endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub flagged_comment_count: u32,
}

impl Post {
    /// Whether the flagged-count badge should be shown.
    pub fn has_flagged_comments(&self) -> bool {
        self.flagged_comment_count > 0
    }

    /// Embedded comments, empty when the server did not include any.
    pub fn comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or(&[])
    }
}

/// Body of `POST /posts/`: a post without any server-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}
