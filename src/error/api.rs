//! Errors raised by the moderation API client.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single API operation.
///
/// `Clone` so results can be sent through the app message channel. The
/// display text is for logs only; screens show their own fixed messages.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx body could not be decoded into the expected resource.
    #[error("could not decode {resource}: {message}")]
    Decode { resource: &'static str, message: String },
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short error code for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(HttpError::Timeout(_)) => "API_TIMEOUT",
            ApiError::Transport(HttpError::ConnectionFailed(_)) => "API_CONNECT",
            ApiError::Transport(_) => "API_TRANSPORT",
            ApiError::Status { status, .. } if *status >= 500 => "API_SERVER",
            ApiError::Status { .. } => "API_CLIENT",
            ApiError::Decode { .. } => "API_DECODE",
        }
    }
}
