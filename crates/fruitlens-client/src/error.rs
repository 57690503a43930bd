//! Error types for the classification client.

use thiserror::Error;

/// Result type for classification calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while submitting an image for classification.
///
/// Only `Configuration` is terminal; the others are per-attempt failures
/// that trigger fallback to the next upload encoding. When every encoding
/// fails, the last attempt's error is surfaced.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client is not configured: {0}")]
    Configuration(String),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("unexpected response: {0}")]
    ResponseFormat(String),

    #[error("endpoint returned no valid classification results")]
    NoValidResults,

    #[error("API error: {0}")]
    Api(String),
}

impl ClientError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an upload error.
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload(message.into())
    }

    /// Create a response format error.
    pub fn response_format(message: impl Into<String>) -> Self {
        Self::ResponseFormat(message.into())
    }

    /// Create an API error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
}
