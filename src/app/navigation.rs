//! Navigation methods for the App.
//!
//! Every navigation mounts a fresh view (new token, empty state) and issues
//! that view's fetch. Returning to a screen always re-fetches.

use crate::state::{ModeratorState, PostDetailState, PostListState};

use super::{App, Screen, View};

impl App {
    pub fn navigate_to_post_list(&mut self) {
        let token = self.lifetimes.mount();
        self.view = View::PostList(PostListState::new(token));
        tracing::debug!(token = token.id(), "mounted post list");
        self.spawn_fetch_posts(token, None);
        self.mark_dirty();
    }

    pub fn open_post(&mut self, post_id: u64) {
        let token = self.lifetimes.mount();
        self.view = View::PostDetail(PostDetailState::new(token, post_id));
        tracing::debug!(token = token.id(), post_id, "mounted post detail");
        self.spawn_fetch_post(token, post_id);
        self.mark_dirty();
    }

    pub fn navigate_to_moderator(&mut self) {
        let token = self.lifetimes.mount();
        self.view = View::Moderator(ModeratorState::new(token));
        tracing::debug!(token = token.id(), "mounted moderator dashboard");
        self.spawn_fetch_flagged(token);
        self.mark_dirty();
    }

    /// Back to the post list from any other screen.
    pub fn go_back(&mut self) {
        if self.screen() != Screen::PostList {
            self.navigate_to_post_list();
        }
    }

    /// Remount the current screen, discarding its state.
    pub fn reload(&mut self) {
        match &self.view {
            View::PostList(state) => {
                let query = state.active_query.clone();
                let token = self.lifetimes.mount();
                let mut fresh = PostListState::new(token);
                fresh.active_query = query.clone();
                self.view = View::PostList(fresh);
                self.spawn_fetch_posts(token, query);
                self.mark_dirty();
            }
            View::PostDetail(state) => {
                let post_id = state.post_id;
                self.open_post(post_id);
            }
            View::Moderator(_) => self.navigate_to_moderator(),
        }
    }

    /// Apply the search prompt and fetch matching posts.
    pub fn commit_search(&mut self) {
        let token = self.lifetimes.mount();
        let View::PostList(state) = &mut self.view else {
            return;
        };
        let query = state.commit_search();
        state.token = token;
        state.selected = 0;
        state.posts = crate::state::Fetch::Loading;
        tracing::debug!(token = token.id(), query = ?query, "searching posts");
        self.spawn_fetch_posts(token, query);
        self.mark_dirty();
    }
}
