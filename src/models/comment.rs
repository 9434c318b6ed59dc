//! Comment resource and its creation request.

use serde::{Deserialize, Serialize};

/// User-submitted text attached to exactly one post.
///
/// `flagged` is set by the server's moderation engine; the client only ever
/// clears it through the approve operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    /// Owning post id.
    pub post: u64,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub flagged: bool,
    pub created_at: String,
}

impl Comment {
    /// Case-insensitive check used by the "Potential Spam" heuristic.
    pub fn mentions_spam(&self) -> bool {
        self.text.to_lowercase().contains("spam")
    }
}

/// Body of `POST /comments/`. The server assigns the id and the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateComment {
    pub post: u64,
    pub author: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn comment(text: &str) -> Comment {
        Comment {
            id: 1,
            post: 1,
            author: "a".to_string(),
            text: text.to_string(),
            flagged: true,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_mentions_spam_is_case_insensitive() {
        assert!(comment("This is SPAM").mentions_spam());
        assert!(comment("spammy link").mentions_spam());
        assert!(!comment("s p a m").mentions_spam());
    }

    #[test]
    fn test_create_comment_has_no_id_or_flag() {
        let body = serde_json::to_value(CreateComment {
            post: 3,
            author: "Ann".to_string(),
            text: "Nice".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"post": 3, "author": "Ann", "text": "Nice"}));
    }
}
