//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PATCH, DELETE)
//! - [`PreferenceStore`] - Persisted key-value preferences

pub mod http;
pub mod preferences;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use preferences::PreferenceStore;
