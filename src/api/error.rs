//! Error types for the remote data gateway.
//!
//! Classifies transport and protocol failures into a small taxonomy so the
//! state machines can map them to user-facing messages without inspecting
//! `reqwest` internals.

use thiserror::Error;

/// Errors that can occur while fetching data from the API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// DNS resolution or TCP connect failed — usually no connectivity.
    #[error("Could not reach the server: {0}")]
    Unreachable(String),

    /// The request exceeded the transport timeout.
    #[error("The request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Any other transport-level failure.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// True for failures caused by the network itself rather than the
    /// server's answer (connectivity loss, timeout).
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, ApiError::Unreachable(_) | ApiError::Timeout)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        if err.is_connect() {
            return ApiError::Unreachable(err.to_string());
        }
        if let Some(status) = err.status() {
            return ApiError::Status {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        ApiError::Transport(err.to_string())
    }
}
