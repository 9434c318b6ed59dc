//! Aggregates shown on the moderator dashboard.

use std::collections::HashSet;

use super::comment::Comment;

/// Statistics derived from the flagged-comment set.
///
/// Always computed from the current snapshot, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlaggedStats {
    /// Number of flagged comments.
    pub total: usize,
    /// Flagged comments whose text contains "spam", case-insensitively.
    /// A client-side label, not a server classification.
    pub potential_spam: usize,
    /// Number of distinct posts among the flagged comments.
    pub posts_affected: usize,
}

impl FlaggedStats {
    pub fn compute(comments: &[Comment]) -> Self {
        let posts: HashSet<u64> = comments.iter().map(|c| c.post).collect();
        Self {
            total: comments.len(),
            potential_spam: comments.iter().filter(|c| c.mentions_spam()).count(),
            posts_affected: posts.len(),
        }
    }
}
