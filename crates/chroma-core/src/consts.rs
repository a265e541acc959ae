//! Constants used throughout the chroma workspace

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest 8-bit channel value, as a float scale
pub const CHANNEL_MAX: f64 = 255.0;

/// Adjustment factor that leaves a channel unchanged (percent)
pub const UNCHANGED_FACTOR: f64 = 100.0;

/// Minimum and maximum adjustment factors (percent)
pub const MIN_FACTOR: f64 = 0.0;
pub const MAX_FACTOR: f64 = 100.0;

/// Neutral values substituted when a channel's factor is zero
pub const NEUTRAL_LUMA: f64 = 0.5;
pub const NEUTRAL_CHROMA: f64 = 0.5;
pub const NEUTRAL_HUE: f64 = 0.0;
pub const NEUTRAL_SATURATION: f64 = 0.0;
pub const NEUTRAL_VALUE: f64 = 1.0;

/// Full turn of the hue wheel in degrees
pub const HUE_DEGREES: f64 = 360.0;
