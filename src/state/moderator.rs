//! State for the moderator dashboard.

use crate::models::{Comment, FlaggedStats};

use super::fetch::{Fetch, ViewToken};

pub const FLAGGED_LOAD_ERROR: &str = "Failed to load flagged comments.";
pub const ACTIONS_DISABLED: &str = "Moderation actions are not enabled.";

/// Action offered on each flagged comment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Remove,
}

impl ModerationAction {
    pub fn label(self) -> &'static str {
        match self {
            ModerationAction::Approve => "Approve",
            ModerationAction::Remove => "Remove",
        }
    }

    pub fn success_notice(self) -> &'static str {
        match self {
            ModerationAction::Approve => "Comment approved.",
            ModerationAction::Remove => "Comment removed.",
        }
    }

    pub fn failure_notice(self) -> &'static str {
        match self {
            ModerationAction::Approve => "Failed to approve comment.",
            ModerationAction::Remove => "Failed to remove comment.",
        }
    }
}

#[derive(Debug)]
pub struct ModeratorState {
    pub token: ViewToken,
    pub flagged: Fetch<Vec<Comment>>,
    pub selected: usize,
    /// One-line feedback from the last moderation action
    pub notice: Option<String>,
    /// Comment with an action in flight
    pub pending: Option<u64>,
}

impl ModeratorState {
    pub fn new(token: ViewToken) -> Self {
        Self {
            token,
            flagged: Fetch::Loading,
            selected: 0,
            notice: None,
            pending: None,
        }
    }

    pub fn apply_loaded(&mut self, comments: Vec<Comment>) {
        self.flagged = Fetch::Loaded(comments);
        self.clamp_selection();
    }

    pub fn apply_failed(&mut self) {
        self.flagged = Fetch::Failed(FLAGGED_LOAD_ERROR.to_string());
        self.selected = 0;
    }

    /// Current snapshot; empty while loading or after a failure.
    pub fn comments(&self) -> &[Comment] {
        self.flagged.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Recomputed from the current snapshot on every call.
    pub fn stats(&self) -> FlaggedStats {
        FlaggedStats::compute(self.comments())
    }

    pub fn selected_comment(&self) -> Option<&Comment> {
        self.comments().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.comments().len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.comments().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Record an action start. Returns false when one is already in flight.
    pub fn begin_action(&mut self, comment_id: u64) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(comment_id);
        self.notice = None;
        true
    }

    /// Apply an action outcome. On success the comment leaves the queue.
    pub fn finish_action(&mut self, comment_id: u64, action: ModerationAction, ok: bool) {
        if self.pending == Some(comment_id) {
            self.pending = None;
        }
        if ok {
            if let Some(comments) = self.flagged.loaded_mut() {
                comments.retain(|c| c.id != comment_id);
            }
            self.clamp_selection();
            self.notice = Some(action.success_notice().to_string());
        } else {
            self.notice = Some(action.failure_notice().to_string());
        }
    }

    pub fn actions_disabled(&mut self) {
        self.notice = Some(ACTIONS_DISABLED.to_string());
    }
}
