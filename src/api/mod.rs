//! Client for the remote posts/comments service.

mod client;

pub use client::{ApiClient, DEFAULT_API_URL};
