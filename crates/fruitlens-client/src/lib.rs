//! Classification client for the hosted inference API.
//!
//! This crate provides:
//! - An immutable classifier configuration (model id + access token)
//! - The four-stage upload-encoding fallback (binary, base64 JSON,
//!   base64 flat, multipart form)
//! - Normalization of the endpoint's heterogeneous response shapes into
//!   a single prediction list

pub mod classifier;
pub mod config;
pub mod encoding;
pub mod error;
pub mod response;

pub use classifier::{Classifier, DEFAULT_BASE_URL};
pub use config::ClassifierConfig;
pub use encoding::UploadEncoding;
pub use error::{ClientError, ClientResult};
