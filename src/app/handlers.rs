//! Message handling for the App.

use crate::state::ViewToken;

use super::{App, AppMessage, View};

/// Work started after the view state has been updated.
enum FollowUp {
    ScheduleSuccessReset(ViewToken),
    RefetchPost(ViewToken, u64),
}

impl App {
    /// Handle an incoming async message.
    ///
    /// Messages issued for a view that is no longer mounted are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        let active = self.view.token();
        if msg.token() != active {
            tracing::debug!(
                kind = msg.kind(),
                token = msg.token().id(),
                active = active.id(),
                "dropping stale completion"
            );
            return;
        }

        self.mark_dirty();
        let mut follow_up = None;
        match (msg, &mut self.view) {
            (AppMessage::PostsLoaded { result, .. }, View::PostList(state)) => match result {
                Ok(listing) => {
                    tracing::debug!(count = listing.len(), "posts loaded");
                    state.apply_loaded(listing);
                }
                Err(e) => {
                    tracing::error!(error = %e, code = e.error_code(), "failed to load posts");
                    state.apply_failed();
                }
            },
            (AppMessage::PostLoaded { result, .. }, View::PostDetail(state)) => match result {
                Ok(post) => {
                    if post.is_none() {
                        tracing::warn!(post_id = state.post_id, "post response had no usable post");
                    }
                    state.apply_loaded(post);
                }
                Err(e) => {
                    tracing::error!(post_id = state.post_id, error = %e, code = e.error_code(), "failed to load post");
                    state.apply_failed();
                }
            },
            (AppMessage::FlaggedLoaded { result, .. }, View::Moderator(state)) => match result {
                Ok(listing) => {
                    tracing::debug!(count = listing.len(), "flagged comments loaded");
                    state.apply_loaded(listing.items);
                }
                Err(e) => {
                    tracing::error!(error = %e, code = e.error_code(), "failed to load flagged comments");
                    state.apply_failed();
                }
            },
            (AppMessage::CommentSubmitted { token, result }, View::PostDetail(state)) => {
                match result {
                    Ok(comment) => {
                        tracing::info!(post_id = state.post_id, comment_id = comment.id, flagged = comment.flagged, "comment submitted");
                        state.form.submit_succeeded();
                        follow_up = Some(FollowUp::ScheduleSuccessReset(token));
                    }
                    Err(e) => {
                        tracing::error!(post_id = state.post_id, error = %e, code = e.error_code(), "failed to submit comment");
                        state.form.submit_failed();
                    }
                }
            }
            (AppMessage::SubmitSuccessElapsed { token }, View::PostDetail(state)) => {
                // Re-fetch the whole post; the form resets when it lands.
                state.begin_refresh_after_submit();
                follow_up = Some(FollowUp::RefetchPost(token, state.post_id));
            }
            (
                AppMessage::ModerationFinished {
                    comment_id,
                    action,
                    result,
                    ..
                },
                View::Moderator(state),
            ) => {
                if let Err(e) = &result {
                    tracing::error!(comment_id, action = action.label(), error = %e, "moderation action failed");
                } else {
                    tracing::info!(comment_id, action = action.label(), "moderation action applied");
                }
                state.finish_action(comment_id, action, result.is_ok());
            }
            (msg, view) => {
                tracing::warn!(kind = msg.kind(), screen = ?view.screen(), "message does not match mounted view");
            }
        }

        match follow_up {
            Some(FollowUp::ScheduleSuccessReset(token)) => self.schedule_success_reset(token),
            Some(FollowUp::RefetchPost(token, post_id)) => self.spawn_fetch_post(token, post_id),
            None => {}
        }
    }
}
