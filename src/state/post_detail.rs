//! State for the post detail screen.

use crate::models::{Comment, Post};

use super::comment_form::{CommentForm, FormField};
use super::fetch::{Fetch, ViewToken};

pub const POST_LOAD_ERROR: &str = "Failed to load post. Please try again later.";
pub const POST_NOT_FOUND: &str = "Post not found";

/// Which part of the detail screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    #[default]
    Comments,
    Author,
    Text,
}

impl DetailFocus {
    pub fn next(self) -> Self {
        match self {
            DetailFocus::Comments => DetailFocus::Author,
            DetailFocus::Author => DetailFocus::Text,
            DetailFocus::Text => DetailFocus::Comments,
        }
    }

    pub fn is_form(self) -> bool {
        !matches!(self, DetailFocus::Comments)
    }
}

#[derive(Debug)]
pub struct PostDetailState {
    pub token: ViewToken,
    pub post_id: u64,
    /// `Loaded(None)` means the request succeeded without a usable post.
    pub post: Fetch<Option<Post>>,
    /// A re-fetch is in flight while the previous copy stays on screen.
    pub refreshing: bool,
    /// The form's success message clears once the re-fetch lands
    pub reset_form_on_load: bool,
    pub focus: DetailFocus,
    pub scroll: u16,
    pub form: CommentForm,
}

impl PostDetailState {
    pub fn new(token: ViewToken, post_id: u64) -> Self {
        Self {
            token,
            post_id,
            post: Fetch::Loading,
            refreshing: false,
            reset_form_on_load: false,
            focus: DetailFocus::default(),
            scroll: 0,
            form: CommentForm::new(),
        }
    }

    pub fn apply_loaded(&mut self, post: Option<Post>) {
        self.post = Fetch::Loaded(post);
        self.settle_refresh();
    }

    pub fn apply_failed(&mut self) {
        self.post = Fetch::Failed(POST_LOAD_ERROR.to_string());
        self.settle_refresh();
    }

    fn settle_refresh(&mut self) {
        self.refreshing = false;
        if !self.form_available() {
            self.focus = DetailFocus::Comments;
        }
        if std::mem::take(&mut self.reset_form_on_load) {
            self.form.finish_success();
        }
    }

    /// Re-fetch after a successful submission. The form keeps showing its
    /// success message until the fresh copy (or an error) arrives.
    pub fn begin_refresh_after_submit(&mut self) {
        self.reset_form_on_load = true;
        self.begin_refresh();
    }

    /// Mark a re-fetch as started.
    pub fn begin_refresh(&mut self) {
        if self.post.loaded().is_some() {
            self.refreshing = true;
        } else {
            self.post = Fetch::Loading;
        }
    }

    pub fn current_post(&self) -> Option<&Post> {
        self.post.loaded().and_then(Option::as_ref)
    }

    pub fn comments(&self) -> &[Comment] {
        self.current_post().map(Post::comments).unwrap_or(&[])
    }

    /// Error text for the error-or-missing state.
    pub fn error_text(&self) -> Option<&str> {
        match &self.post {
            Fetch::Failed(message) => Some(message),
            Fetch::Loaded(None) => Some(POST_NOT_FOUND),
            _ => None,
        }
    }

    /// The form is only shown, and only takes input, once the post is loaded.
    pub fn form_available(&self) -> bool {
        self.current_post().is_some()
    }

    pub fn cycle_focus(&mut self) {
        if !self.form_available() {
            return;
        }
        self.focus = self.focus.next();
        match self.focus {
            DetailFocus::Author => self.form.focus(FormField::Author),
            DetailFocus::Text => self.form.focus(FormField::Text),
            DetailFocus::Comments => {}
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.comments().len().saturating_sub(1);
        if usize::from(self.scroll) < max {
            self.scroll += 1;
        }
    }
}
