//! # Chroma - YCbCr and HSV channel decomposition
//!
//! This crate provides the high-level API for viewing an RGBA image through two
//! alternate color models, scaling their channels, and rendering each channel on
//! its own.
//!
//! ## Quick Start
//!
//! ### Adjusting channels
//!
//! ```no_run
//! use chroma::{load_image, process, save_png, Adjustments, ColorModel, YcbcrAdjustment};
//!
//! let image = load_image("input.png").unwrap();
//! let adjustments = Adjustments {
//!     ycbcr: YcbcrAdjustment::new().y(50.0),
//!     ..Adjustments::default()
//! };
//!
//! let darker = process(&image, ColorModel::Ycbcr, &adjustments).unwrap();
//! save_png(&darker, "darker.png").unwrap();
//! ```
//!
//! ### Isolating channels
//!
//! ```no_run
//! use chroma::{isolate, load_image, save_png};
//!
//! let image = load_image("input.png").unwrap();
//! let channels = isolate(&image).unwrap();
//! for (channel, buffer) in channels.iter() {
//!     save_png(buffer, format!("channel-{}.png", channel)).unwrap();
//! }
//! ```
//!
//! ## Adjustment semantics
//!
//! Factors are percentages of the original channel. At 0 a channel is replaced by
//! its neutral value: Y and Cb/Cr become 0.5, H and S become 0, V becomes 1.
//! Reconstructed RGB values outside [0, 255] are clamped.

// Re-export core types
pub use chroma_core::{
    consts, Adjustments, Channel, ChromaError, ChromaResult, ColorModel, Dimensions, Hsv,
    HsvAdjustment, PixelBuffer, Rgb, Ycbcr, YcbcrAdjustment,
};

// Re-export conversions
pub use chroma_color::{hsv_to_rgb, rgb_to_hsv, rgb_to_ycbcr, ycbcr_to_rgb, ToRgb};

// Re-export pipelines
pub use chroma_pipeline::{
    adjust_hsv, adjust_pixel, adjust_ycbcr, isolate, isolate_pixel, process, IsolatedChannels,
    Pipeline, PipelineOptions,
};

pub mod io;

pub use io::{decode_image, from_dynamic_image, load_image, save_png, to_rgba_image};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
