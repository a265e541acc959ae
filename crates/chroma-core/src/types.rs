//! Core value types for chroma

use std::fmt;

/// 8-bit RGB color in the device color model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to [0, 1]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / crate::consts::CHANNEL_MAX,
            self.g as f64 / crate::consts::CHANNEL_MAX,
            self.b as f64 / crate::consts::CHANNEL_MAX,
        )
    }

    /// Largest per-channel absolute difference to another color
    pub fn max_channel_diff(self, other: Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// Luma/chroma color, every channel in [0, 1] with Cb/Cr centered at 0.5
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ycbcr {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
}

impl Ycbcr {
    pub const fn new(y: f64, cb: f64, cr: f64) -> Self {
        Self { y, cb, cr }
    }
}

/// Hue in degrees [0, 360), saturation and value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Alternate color model a pipeline works in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Luma plus blue- and red-difference chroma
    Ycbcr,
    /// Hue, saturation, value
    Hsv,
}

impl ColorModel {
    pub fn name(&self) -> &'static str {
        match self {
            ColorModel::Ycbcr => "ycbcr",
            ColorModel::Hsv => "hsv",
        }
    }

    pub fn channels(&self) -> [Channel; 3] {
        match self {
            ColorModel::Ycbcr => [Channel::Y, Channel::Cb, Channel::Cr],
            ColorModel::Hsv => [Channel::H, Channel::S, Channel::V],
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single channel of one of the alternate color models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Y,
    Cb,
    Cr,
    H,
    S,
    V,
}

impl Channel {
    /// All channels, YCbCr first
    pub const ALL: [Channel; 6] = [
        Channel::Y,
        Channel::Cb,
        Channel::Cr,
        Channel::H,
        Channel::S,
        Channel::V,
    ];

    pub fn model(&self) -> ColorModel {
        match self {
            Channel::Y | Channel::Cb | Channel::Cr => ColorModel::Ycbcr,
            Channel::H | Channel::S | Channel::V => ColorModel::Hsv,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Y => "y",
            Channel::Cb => "cb",
            Channel::Cr => "cr",
            Channel::H => "h",
            Channel::S => "s",
            Channel::V => "v",
        }
    }

    /// Position in [`Channel::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
