//! API-surface error types.
//!
//! Provides API-specific errors with retryability classification and
//! integration with the shared harness errors.

use harness_common::HarnessError;
use thiserror::Error;

/// API-surface errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Login was rejected by the remote service
    #[error("Login failed with status {0}")]
    LoginFailed(u16),

    /// Logout was rejected by the remote service
    #[error("Logout failed with status {0}")]
    LogoutFailed(u16),

    /// Credentials were needed but not configured
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// A JSON body was expected but the response carried none
    #[error("Expected a JSON body from {0} but the response was empty")]
    EmptyBody(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Shared harness error
    #[error(transparent)]
    Harness(#[from] HarnessError),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Check if the error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Harness(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an empty body error for the given URL.
    #[must_use]
    pub fn empty_body(url: impl Into<String>) -> Self {
        Self::EmptyBody(url.into())
    }
}
