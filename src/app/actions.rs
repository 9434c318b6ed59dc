//! Async actions: each spawns one request and reports back as an
//! [`AppMessage`] tagged with the issuing view's token.

use crate::state::{ModerationAction, SubmitBlocked, ViewToken};

use super::{App, AppMessage, View};

impl App {
    fn send(tx: &tokio::sync::mpsc::UnboundedSender<AppMessage>, msg: AppMessage) {
        if tx.send(msg).is_err() {
            tracing::debug!("message channel closed, dropping completion");
        }
    }

    pub(super) fn spawn_fetch_posts(&self, token: ViewToken, query: Option<String>) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match query.as_deref() {
                Some(q) => client.search_posts(q).await,
                None => client.list_posts().await,
            };
            Self::send(&tx, AppMessage::PostsLoaded { token, result });
        });
    }

    pub(super) fn spawn_fetch_post(&self, token: ViewToken, post_id: u64) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.get_post(post_id).await;
            Self::send(&tx, AppMessage::PostLoaded { token, result });
        });
    }

    pub(super) fn spawn_fetch_flagged(&self, token: ViewToken) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.list_flagged().await;
            Self::send(&tx, AppMessage::FlaggedLoaded { token, result });
        });
    }

    /// Validate the comment form and, if valid, send it.
    ///
    /// Invalid input sets the form error and makes no request.
    pub fn submit_comment(&mut self) {
        let View::PostDetail(state) = &mut self.view else {
            return;
        };
        if !state.form_available() {
            tracing::debug!(post_id = state.post_id, "no post loaded, comment not sent");
            return;
        }
        let token = state.token;
        let post_id = state.post_id;

        let request = match state.form.begin_submit(post_id) {
            Ok(request) => request,
            Err(SubmitBlocked::Invalid) => {
                tracing::debug!(post_id, "comment rejected by validation");
                self.mark_dirty();
                return;
            }
            Err(SubmitBlocked::Busy) => return,
        };
        self.mark_dirty();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.create_comment(&request).await;
            Self::send(&tx, AppMessage::CommentSubmitted { token, result });
        });
    }

    pub(super) fn schedule_success_reset(&self, token: ViewToken) {
        let delay = self.context.config.success_reset_delay;
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            Self::send(&tx, AppMessage::SubmitSuccessElapsed { token });
        });
    }

    /// Approve or remove the selected flagged comment.
    pub fn moderate_selected(&mut self, action: ModerationAction) {
        let enabled = self.context.config.moderation_actions;
        let View::Moderator(state) = &mut self.view else {
            return;
        };
        let Some(comment_id) = state.selected_comment().map(|c| c.id) else {
            return;
        };
        self.needs_redraw = true;

        // TODO: drop the flag once product confirms these actions should call the API.
        if !enabled {
            tracing::info!(comment_id, action = action.label(), "moderation actions disabled");
            state.actions_disabled();
            return;
        }
        if !state.begin_action(comment_id) {
            return;
        }

        let token = state.token;
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match action {
                ModerationAction::Approve => client.approve_comment(comment_id).await.map(|_| ()),
                ModerationAction::Remove => client.remove_comment(comment_id).await,
            };
            Self::send(
                &tx,
                AppMessage::ModerationFinished {
                    token,
                    comment_id,
                    action,
                    result,
                },
            );
        });
    }
}
