//! Data models for the moderation API.

mod comment;
mod listing;
mod post;
mod stats;
pub mod text_utils;

pub use comment::{Comment, CreateComment};
pub use listing::{normalize_listing, Listing};
pub use post::{NewPost, Post};
pub use stats::FlaggedStats;
