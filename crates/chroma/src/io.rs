//! Image file interop
//!
//! Decoding and encoding are delegated to the `image` crate; this module only
//! moves pixels between its RGBA8 images and [`PixelBuffer`].

use chroma_core::{ChromaError, ChromaResult, PixelBuffer};
use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};
use std::path::Path;

fn map_image_error(err: ImageError) -> ChromaError {
    match err {
        ImageError::IoError(e) => ChromaError::Io(e),
        other => ChromaError::ImageCodec(other.to_string()),
    }
}

/// Convert any decoded image to an RGBA pixel buffer
pub fn from_dynamic_image(image: DynamicImage) -> ChromaResult<PixelBuffer> {
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

/// Decode an image file of any supported format
pub fn load_image<P: AsRef<Path>>(path: P) -> ChromaResult<PixelBuffer> {
    let image = image::open(path).map_err(map_image_error)?;
    from_dynamic_image(image)
}

/// Decode an in-memory encoded image, guessing the format from its header
pub fn decode_image(bytes: &[u8]) -> ChromaResult<PixelBuffer> {
    let image = image::load_from_memory(bytes).map_err(map_image_error)?;
    from_dynamic_image(image)
}

/// Copy a pixel buffer into an `image` RGBA8 image
pub fn to_rgba_image(buffer: &PixelBuffer) -> ChromaResult<RgbaImage> {
    RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec()).ok_or(
        ChromaError::BufferSizeMismatch {
            expected: buffer.pixel_count() * 4,
            actual: buffer.as_bytes().len(),
        },
    )
}

/// Encode a pixel buffer as PNG at `path`
pub fn save_png<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> ChromaResult<()> {
    to_rgba_image(buffer)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(map_image_error)
}
