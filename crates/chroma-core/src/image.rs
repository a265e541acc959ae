//! RGBA pixel buffer

use crate::consts::BYTES_PER_PIXEL;
use crate::{ChromaError, ChromaResult, Dimensions, Rgb};

/// An 8-bit RGBA image, row-major, four bytes per pixel
///
/// The length of the byte buffer always equals `width * height * 4`; every
/// constructor checks it, so pipeline stages can index pixels without bounds
/// bookkeeping of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled (transparent black) buffer
    pub fn new(width: u32, height: u32) -> ChromaResult<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            dimensions: Dimensions::new(width, height),
            data: vec![0; len],
        })
    }

    /// Wrap existing RGBA bytes, failing if the length does not match the dimensions
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ChromaResult<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(ChromaError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            dimensions: Dimensions::new(width, height),
            data,
        })
    }

    /// Fill a buffer with a single RGBA color
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> ChromaResult<Self> {
        let len = Self::byte_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Self::from_raw(width, height, data)
    }

    fn byte_len(width: u32, height: u32) -> ChromaResult<usize> {
        if width == 0 || height == 0 {
            return Err(ChromaError::InvalidDimensions { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ChromaError::InvalidDimensions { width, height })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA quadruple at (x, y), or `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = (y as usize * self.width() as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.data[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite the pixel at (x, y)
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> ChromaResult<()> {
        if x >= self.width() || y >= self.height() {
            return Err(ChromaError::InvalidParameter(format!(
                "pixel ({}, {}) outside {}x{} buffer",
                x,
                y,
                self.width(),
                self.height()
            )));
        }
        let idx = (y as usize * self.width() as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        Ok(())
    }

    /// Iterate pixels as `(Rgb, alpha)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (Rgb, u8)> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| (Rgb::new(px[0], px[1], px[2]), px[3]))
    }
}
