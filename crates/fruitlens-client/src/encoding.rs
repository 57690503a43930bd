//! Upload encodings.

use std::fmt;

/// The payload encodings tried in sequence when submitting an image.
///
/// Different hosted models accept different request shapes; the client
/// walks this list in order and stops at the first encoding the endpoint
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEncoding {
    /// Raw JPEG bytes with `Content-Type: application/octet-stream`
    Binary,
    /// `{"inputs": {"image": "<base64 JPEG>"}}` as JSON
    Base64Json,
    /// `{"inputs": "<base64 JPEG>"}` as JSON
    Base64Flat,
    /// JPEG as a `file` form field
    Multipart,
}

impl UploadEncoding {
    /// Fallback order. The last entry's error is the one surfaced when
    /// every encoding fails.
    pub const ALL: &'static [UploadEncoding] = &[
        UploadEncoding::Binary,
        UploadEncoding::Base64Json,
        UploadEncoding::Base64Flat,
        UploadEncoding::Multipart,
    ];
}

impl fmt::Display for UploadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UploadEncoding::Binary => "binary",
            UploadEncoding::Base64Json => "base64 JSON",
            UploadEncoding::Base64Flat => "base64 flat",
            UploadEncoding::Multipart => "multipart form",
        };
        write!(f, "{}", name)
    }
}
