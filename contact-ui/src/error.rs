//! UI-surface error types.

use harness_common::HarnessError;
use thiserror::Error;

/// UI-surface errors.
#[derive(Error, Debug)]
pub enum UiError {
    /// Browser process or DevTools protocol failure
    #[error("Browser failure: {0}")]
    Browser(String),

    /// Element was not found on the page
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Current URL did not match the expectation
    #[error("URL address is not correct: expected {expected}, actual {actual}")]
    UrlMismatch {
        /// The URL the test expected
        expected: String,
        /// The URL the browser reported
        actual: String,
    },

    /// Waiting for a condition timed out
    #[error("Wait timed out after {0}ms: {1}")]
    WaitTimeout(u64, String),

    /// An element rendered no readable text
    #[error("No text rendered for {0}")]
    MissingText(String),

    /// Shared harness error
    #[error(transparent)]
    Harness(#[from] HarnessError),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;

impl From<chromiumoxide::error::CdpError> for UiError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Self::Browser(err.to_string())
    }
}

impl UiError {
    /// Create an element-not-found error for a selector.
    #[must_use]
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound(selector.into())
    }

    /// Create a URL mismatch error.
    #[must_use]
    pub fn url_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::UrlMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
