//! AppMessage enum for async communication within the application.

use crate::error::ApiResult;
use crate::models::{Comment, Listing, Post};
use crate::state::{ModerationAction, ViewToken};

/// Completions of async work, tagged with the view they were issued for.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Post list (or search results) fetched
    PostsLoaded {
        token: ViewToken,
        result: ApiResult<Listing<Post>>,
    },
    /// Single post fetched
    PostLoaded {
        token: ViewToken,
        result: ApiResult<Option<Post>>,
    },
    /// Flagged comment queue fetched
    FlaggedLoaded {
        token: ViewToken,
        result: ApiResult<Listing<Comment>>,
    },
    /// Comment creation finished
    CommentSubmitted {
        token: ViewToken,
        result: ApiResult<Comment>,
    },
    /// The success message has been shown long enough
    SubmitSuccessElapsed { token: ViewToken },
    /// Approve/remove finished
    ModerationFinished {
        token: ViewToken,
        comment_id: u64,
        action: ModerationAction,
        result: ApiResult<()>,
    },
}

impl AppMessage {
    /// The view this message belongs to.
    pub fn token(&self) -> ViewToken {
        match self {
            AppMessage::PostsLoaded { token, .. }
            | AppMessage::PostLoaded { token, .. }
            | AppMessage::FlaggedLoaded { token, .. }
            | AppMessage::CommentSubmitted { token, .. }
            | AppMessage::SubmitSuccessElapsed { token }
            | AppMessage::ModerationFinished { token, .. } => *token,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::PostsLoaded { .. } => "PostsLoaded",
            AppMessage::PostLoaded { .. } => "PostLoaded",
            AppMessage::FlaggedLoaded { .. } => "FlaggedLoaded",
            AppMessage::CommentSubmitted { .. } => "CommentSubmitted",
            AppMessage::SubmitSuccessElapsed { .. } => "SubmitSuccessElapsed",
            AppMessage::ModerationFinished { .. } => "ModerationFinished",
        }
    }
}
