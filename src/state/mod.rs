//! Per-screen state.
//!
//! Each screen owns a snapshot of the server data it fetched; nothing is
//! shared between screens and nothing outlives the screen's mount:
//! - [`PostListState`] - posts, selection and search prompt
//! - [`PostDetailState`] - one post with its comments and the [`CommentForm`]
//! - [`ModeratorState`] - flagged comment queue and its statistics
//! - [`ThemeState`] / [`AppContext`] - the persisted light/dark flag

pub mod comment_form;
pub mod context;
pub mod fetch;
pub mod moderator;
pub mod post_detail;
pub mod post_list;
pub mod theme;

pub use comment_form::{CommentForm, FormField, FormPhase, SubmitBlocked};
pub use context::AppContext;
pub use fetch::{Fetch, ViewLifetimes, ViewToken};
pub use moderator::{ModerationAction, ModeratorState};
pub use post_detail::{DetailFocus, PostDetailState};
pub use post_list::PostListState;
pub use theme::ThemeState;
