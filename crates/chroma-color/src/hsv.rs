//! HSV color model

use crate::gamut::rgb_from_unit;
use crate::ToRgb;
use chroma_core::consts::HUE_DEGREES;
use chroma_core::{Hsv, Rgb};

const SECTOR_DEGREES: f64 = 60.0;

/// Convert 8-bit RGB to HSV
///
/// Achromatic colors (all channels equal) get a hue of 0. Otherwise the hue
/// sector is picked by the channel holding the maximum, tested in R, G, B
/// order, so ties resolve towards red.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let mut h = 0.0;
    if diff != 0.0 {
        h = if max == r {
            SECTOR_DEGREES * (((g - b) / diff) % 6.0)
        } else if max == g {
            SECTOR_DEGREES * ((b - r) / diff + 2.0)
        } else {
            SECTOR_DEGREES * ((r - g) / diff + 4.0)
        };
        if h < 0.0 {
            h += HUE_DEGREES;
        }
    }

    let s = if max == 0.0 { 0.0 } else { diff / max };

    Hsv { h, s, v: max }
}

/// Convert HSV back to 8-bit RGB
///
/// The hue picks one of six 60 degree sectors; hues at or past 300 (and
/// anything else outside the first five sectors) land in the last one.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let c = v * s;
    let x = c * (1.0 - ((h / SECTOR_DEGREES) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    rgb_from_unit(r + m, g + m, b + m)
}

impl ToRgb for Hsv {
    fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}
