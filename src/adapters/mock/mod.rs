//! Mock implementations for testing.
//!
//! Enables unit and integration testing without network or file system
//! access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with scripted responses
//! - [`InMemoryPreferences`] - In-memory preference storage

pub mod http;
pub mod preferences;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use preferences::InMemoryPreferences;
