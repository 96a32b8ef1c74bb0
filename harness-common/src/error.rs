//! Centralized error types for the harness crates.
//!
//! This module provides a unified error type shared by the API and UI
//! surfaces, with built-in retryability classification.

use thiserror::Error;

/// Common error type for harness operations.
///
/// All errors are classified as either retryable or non-retryable. The
/// harness never retries on its own, but the classification tells a reader
/// whether a failure was environmental or a genuine assertion failure.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response status did not match the expectation
    #[error("Bad status code for {url}: expected {expected}, actual {actual}")]
    StatusMismatch {
        /// The URL that was called
        url: String,
        /// The status code the test expected
        expected: u16,
        /// The status code the server returned
        actual: u16,
    },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Missing or invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Element was not found on the page
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Waiting for a UI condition timed out
    #[error("Wait timed out after {0}ms: {1}")]
    WaitTimeout(u64, String),

    /// Browser process or protocol failure
    #[error("Browser failure: {0}")]
    Browser(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl HarnessError {
    /// Check if this error is retryable.
    ///
    /// Retryable errors are transient environmental failures; assertion-style
    /// failures (status mismatch, missing element) are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use harness_common::HarnessError;
    ///
    /// let err = HarnessError::Unavailable("connection reset".to_string());
    /// assert!(err.is_retryable());
    ///
    /// let err = HarnessError::ElementNotFound("#submit".to_string());
    /// assert!(!err.is_retryable());
    /// ```
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Unavailable(_) | Self::WaitTimeout(..)
        )
    }

    /// Create a status mismatch error.
    #[must_use]
    pub fn status_mismatch(url: impl Into<String>, expected: u16, actual: u16) -> Self {
        Self::StatusMismatch {
            url: url.into(),
            expected,
            actual,
        }
    }

    /// Create an authentication failed error.
    #[must_use]
    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::AuthFailed(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
