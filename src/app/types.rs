//! Screen and view types.
//!
//! - [`Screen`] - which screen is displayed
//! - [`View`] - the mounted screen together with its state

use crate::state::{ModeratorState, PostDetailState, PostListState, ViewToken};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    PostList,
    PostDetail,
    Moderator,
}

/// The mounted screen. Replaced wholesale on navigation, so a screen's
/// fetched data never outlives it.
#[derive(Debug)]
pub enum View {
    PostList(PostListState),
    PostDetail(PostDetailState),
    Moderator(ModeratorState),
}

impl View {
    pub fn screen(&self) -> Screen {
        match self {
            View::PostList(_) => Screen::PostList,
            View::PostDetail(_) => Screen::PostDetail,
            View::Moderator(_) => Screen::Moderator,
        }
    }

    pub fn token(&self) -> ViewToken {
        match self {
            View::PostList(state) => state.token,
            View::PostDetail(state) => state.token,
            View::Moderator(state) => state.token,
        }
    }
}
