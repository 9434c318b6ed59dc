//! Error types for Smart Alec.
//!
//! - [`ApiError`] - failures of moderation API operations
//! - [`PreferenceError`] - failures of local preference storage
//! - [`ApiResult`] - result alias used by the API client
//!
//! Neither type is shown to the user verbatim. Screens log the error and
//! display a fixed, generic message instead.

mod api;
mod preferences;

pub use api::ApiError;
pub use preferences::PreferenceError;

/// Type alias for results of API operations.
pub type ApiResult<T> = Result<T, ApiError>;
