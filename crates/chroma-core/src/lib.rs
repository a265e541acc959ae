//! Core types and utilities for the chroma workspace
//!
//! This crate provides the fundamental data structures shared by the conversion and
//! pipeline crates: pixel and color value types, the RGBA pixel buffer, the per-channel
//! adjustment model and the error type.

pub mod adjustment;
pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use adjustment::*;
pub use error::{ChromaError, ChromaResult};
pub use image::*;
pub use types::*;
