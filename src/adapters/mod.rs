//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FilePreferenceStore`] - JSON-file preference storage
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses
//! - [`mock::InMemoryPreferences`] - In-memory preference storage

pub mod file_preferences;
pub mod mock;
pub mod reqwest_http;

pub use file_preferences::FilePreferenceStore;
pub use mock::{InMemoryPreferences, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
