//! State for the post list screen.

use crate::models::{Listing, Post};

use super::fetch::{Fetch, ViewToken};

pub const POSTS_LOAD_ERROR: &str = "Failed to load posts. Please try again later.";

/// Post list screen state. Only the first page of results is kept.
#[derive(Debug)]
pub struct PostListState {
    pub token: ViewToken,
    pub posts: Fetch<Vec<Post>>,
    pub selected: usize,
    /// Total reported by a paginated envelope, if any
    pub total: Option<u64>,
    /// True when the server has pages beyond the one shown
    pub has_more: bool,
    /// Search text being edited, `Some` while the search prompt is open
    pub search_input: Option<String>,
    /// Query the current results were fetched with
    pub active_query: Option<String>,
}

impl PostListState {
    pub fn new(token: ViewToken) -> Self {
        Self {
            token,
            posts: Fetch::Loading,
            selected: 0,
            total: None,
            has_more: false,
            search_input: None,
            active_query: None,
        }
    }

    pub fn apply_loaded(&mut self, listing: Listing<Post>) {
        self.total = listing.count;
        self.has_more = listing.has_more();
        self.posts = Fetch::Loaded(listing.items);
        self.clamp_selection();
    }

    pub fn apply_failed(&mut self) {
        self.posts = Fetch::Failed(POSTS_LOAD_ERROR.to_string());
        self.selected = 0;
    }

    fn len(&self) -> usize {
        self.posts.loaded().map(Vec::len).unwrap_or(0)
    }

    fn clamp_selection(&mut self) {
        let len = self.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.loaded().and_then(|posts| posts.get(self.selected))
    }

    pub fn is_searching(&self) -> bool {
        self.search_input.is_some()
    }

    /// Open the search prompt, prefilled with the active query.
    pub fn begin_search(&mut self) {
        self.search_input = Some(self.active_query.clone().unwrap_or_default());
    }

    pub fn search_char(&mut self, c: char) {
        if let Some(input) = self.search_input.as_mut() {
            input.push(c);
        }
    }

    pub fn search_backspace(&mut self) {
        if let Some(input) = self.search_input.as_mut() {
            input.pop();
        }
    }

    pub fn cancel_search(&mut self) {
        self.search_input = None;
    }

    /// Close the prompt and return the trimmed query; `None` means "all posts".
    pub fn commit_search(&mut self) -> Option<String> {
        let query = self
            .search_input
            .take()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        self.active_query = query.clone();
        query
    }
}
