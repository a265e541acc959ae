//! Gamut clamp for reconstructed RGB channels

use chroma_core::consts::CHANNEL_MAX;
use chroma_core::Rgb;

/// Clamp a channel in 0..=255 scale into the 8-bit range and round to nearest
pub fn clamp_channel(value: f64) -> u8 {
    // NaN clamps to 0
    let clamped = num_traits::clamp(value, 0.0, CHANNEL_MAX);
    if clamped.is_nan() {
        return 0;
    }
    clamped.round() as u8
}

/// Build an RGB color from unit-range channels, scaling by 255 and clamping
pub fn rgb_from_unit(r: f64, g: f64, b: f64) -> Rgb {
    Rgb::new(
        clamp_channel(r * CHANNEL_MAX),
        clamp_channel(g * CHANNEL_MAX),
        clamp_channel(b * CHANNEL_MAX),
    )
}
