//! Input context for determining which commands are available.

use crate::app::{App, View};

/// Where key events are currently routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputContext {
    PostList,
    /// The post list's search prompt is open
    PostSearch,
    /// Post detail with the comment list focused
    DetailComments,
    /// Post detail with a form field focused
    DetailForm,
    Moderator,
}

impl InputContext {
    pub fn from_app(app: &App) -> Self {
        match &app.view {
            View::PostList(state) if state.is_searching() => InputContext::PostSearch,
            View::PostList(_) => InputContext::PostList,
            View::PostDetail(state) if state.focus.is_form() && state.form_available() => InputContext::DetailForm,
            View::PostDetail(_) => InputContext::DetailComments,
            View::Moderator(_) => InputContext::Moderator,
        }
    }

    /// Printable characters are inserted as text.
    pub fn accepts_text(self) -> bool {
        matches!(self, InputContext::PostSearch | InputContext::DetailForm)
    }
}
