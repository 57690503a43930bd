//! Error types for image operations.

use thiserror::Error;

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors that can occur while decoding or preprocessing an image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("invalid target size {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },

    #[error("JPEG encoding failed: {0}")]
    Encode(String),
}

impl ImageError {
    /// Create an invalid image error.
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage(message.into())
    }

    /// Create an encoding error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode(message.into())
    }
}
