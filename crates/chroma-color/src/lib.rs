//! Color model conversions for chroma
//!
//! This crate implements the conversions between 8-bit RGB and the two alternate
//! color models:
//! - RGB <-> YCbCr (luma plus centered chroma)
//! - RGB <-> HSV (hue, saturation, value)
//!
//! All conversions are pure, total functions. Reconstructed RGB values that fall
//! outside the 8-bit gamut are clamped rather than reported.

pub mod gamut;
pub mod hsv;
pub mod ycbcr;

pub use gamut::*;
pub use hsv::*;
pub use ycbcr::*;

use chroma_core::Rgb;

/// Reconstruct 8-bit RGB from a color in one of the alternate models
pub trait ToRgb {
    fn to_rgb(self) -> Rgb;
}
