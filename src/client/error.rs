//! Error types for the completion client

use thiserror::Error;

/// Result type for completion requests
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Errors that can occur while talking to the completion API
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The API answered with a non-success status
    #[error("API returned error status {status}: {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the body
        message: String,
    },

    /// Transport-level failure
    #[error("Request error: {0}")]
    RequestError(String),

    /// The body was not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            CompletionError::MalformedResponse(error.to_string())
        } else {
            CompletionError::RequestError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for CompletionError {
    fn from(error: serde_json::Error) -> Self {
        CompletionError::MalformedResponse(error.to_string())
    }
}
