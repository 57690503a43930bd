//! Image decoding and preprocessing.
//!
//! This crate normalizes arbitrary uploaded images into the shape the
//! hosted classification models expect: fixed pixel dimensions, RGB color
//! mode, validity-checked at decode time.

pub mod error;
pub mod preprocess;

pub use error::{ImageError, ImageResult};
pub use preprocess::{
    decode, encode_jpeg, preprocess, preprocess_standard_sizes, TARGET_SIZE,
};
