//! Preprocessing steps applied before an image is sent for classification.

use std::collections::BTreeMap;
use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageOutputFormat};
use tracing::{debug, warn};

use crate::error::{ImageError, ImageResult};

/// Pixel dimensions expected by the hosted models.
pub const TARGET_SIZE: (u32, u32) = (224, 224);

/// Alternate sizes used by [`preprocess_standard_sizes`] for diagnostics.
const STANDARD_SIZES: &[(&str, (u32, u32))] = &[
    ("small", (224, 224)),
    ("medium", (256, 256)),
    ("large", (384, 384)),
    ("clip", (224, 224)),
];

/// Decode an uploaded byte stream into a bitmap.
///
/// Decoding doubles as the validity check: undecodable input yields
/// [`ImageError::InvalidImage`], never a blank image.
pub fn decode(bytes: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| ImageError::invalid_image(e.to_string()))
}

/// Normalize an image for submission: resize to `target_size` when needed
/// and convert to RGB. Pixel values are passed through unscaled; the hosted
/// models normalize internally.
pub fn preprocess(image: &DynamicImage, target_size: (u32, u32)) -> ImageResult<DynamicImage> {
    let (width, height) = target_size;
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidTargetSize { width, height });
    }

    let mut image = if image.dimensions() != target_size {
        debug!(
            from = ?image.dimensions(),
            to = ?target_size,
            "resizing image"
        );
        image.resize_exact(width, height, FilterType::Lanczos3)
    } else {
        image.clone()
    };

    image = convert_to_rgb(image);

    Ok(image)
}

/// Preprocess at every standard size plus the original, unresized.
///
/// A per-size failure only omits that entry; partial maps are acceptable.
/// Useful when troubleshooting model compatibility.
pub fn preprocess_standard_sizes(
    image: &DynamicImage,
) -> BTreeMap<&'static str, DynamicImage> {
    let mut result = BTreeMap::new();

    for (name, size) in STANDARD_SIZES {
        match preprocess(image, *size) {
            Ok(processed) => {
                result.insert(*name, processed);
            }
            Err(e) => {
                warn!(size = name, error = %e, "skipping standard size");
            }
        }
    }

    // The original keeps its dimensions and only gets the RGB conversion.
    result.insert("original", convert_to_rgb(image.clone()));

    result
}

/// Serialize an image as a JPEG byte stream for upload.
pub fn encode_jpeg(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Jpeg(90))
        .map_err(|e| ImageError::encode(e.to_string()))?;
    Ok(bytes)
}

fn convert_to_rgb(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
