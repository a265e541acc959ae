//! YCbCr color model
//!
//! Full-range luma/chroma with every channel in [0, 1]. Cb and Cr are offset by
//! 0.5 so that 0.5 means "no chroma".

use crate::gamut::rgb_from_unit;
use crate::ToRgb;
use chroma_core::consts::NEUTRAL_CHROMA;
use chroma_core::{Rgb, Ycbcr};

/// Forward luma weights
const KR: f64 = 0.299;
const KG: f64 = 0.587;
const KB: f64 = 0.114;

/// Forward chroma rows (without the 0.5 offset)
const CB_ROW: [f64; 3] = [-0.169, -0.331, 0.5];
const CR_ROW: [f64; 3] = [0.5, -0.419, -0.081];

/// Inverse coefficients
const CR_TO_R: f64 = 1.402;
const CB_TO_G: f64 = 0.344136;
const CR_TO_G: f64 = 0.714136;
const CB_TO_B: f64 = 1.772;

/// Convert 8-bit RGB to YCbCr
pub fn rgb_to_ycbcr(rgb: Rgb) -> Ycbcr {
    let (r, g, b) = rgb.to_unit();

    let y = KR * r + KG * g + KB * b;
    let cb = CB_ROW[0] * r + CB_ROW[1] * g + CB_ROW[2] * b + NEUTRAL_CHROMA;
    let cr = CR_ROW[0] * r + CR_ROW[1] * g + CR_ROW[2] * b + NEUTRAL_CHROMA;

    Ycbcr { y, cb, cr }
}

/// Convert YCbCr back to 8-bit RGB
///
/// Channels may be out of gamut (for example after an adjustment); the result
/// is clamped to [0, 255] and rounded.
pub fn ycbcr_to_rgb(y: f64, cb: f64, cr: f64) -> Rgb {
    let cb = cb - NEUTRAL_CHROMA;
    let cr = cr - NEUTRAL_CHROMA;

    let r = y + CR_TO_R * cr;
    let g = y - CB_TO_G * cb - CR_TO_G * cr;
    let b = y + CB_TO_B * cb;

    rgb_from_unit(r, g, b)
}

impl ToRgb for Ycbcr {
    fn to_rgb(self) -> Rgb {
        ycbcr_to_rgb(self.y, self.cb, self.cr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let white = rgb_to_ycbcr(Rgb::new(255, 255, 255));
        assert!((white.y - 1.0).abs() < 1e-9);
        assert!((white.cb - 0.5).abs() < 1e-9);
        assert!((white.cr - 0.5).abs() < 1e-9);

        let black = rgb_to_ycbcr(Rgb::new(0, 0, 0));
        assert_eq!(black, Ycbcr::new(0.0, 0.5, 0.5));

        let red = rgb_to_ycbcr(Rgb::new(255, 0, 0));
        assert!((red.y - 0.299).abs() < 1e-9);
        assert!((red.cb - 0.331).abs() < 1e-9);
        assert!((red.cr - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_pixel() {
        let ycc = rgb_to_ycbcr(Rgb::new(200, 50, 80));
        assert!((ycc.y - 0.38537).abs() < 1e-4, "y = {}", ycc.y);
        assert!((ycc.cb - 0.45941).abs() < 1e-4, "cb = {}", ycc.cb);
        assert!((ycc.cr - 0.78459).abs() < 1e-4, "cr = {}", ycc.cr);
    }

    #[test]
    fn test_to_rgb_matches_ycbcr_to_rgb() {
        let ycc = rgb_to_ycbcr(Rgb::new(17, 99, 230));
        assert_eq!(ycc.to_rgb(), ycbcr_to_rgb(ycc.y, ycc.cb, ycc.cr));
        assert_eq!(Ycbcr::new(2.0, 0.5, 0.5).to_rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        assert_eq!(ycbcr_to_rgb(1.0, 0.5, 1.0), Rgb::new(255, 164, 255));
        assert_eq!(ycbcr_to_rgb(-0.5, 0.5, 0.5), Rgb::new(0, 0, 0));
        assert_eq!(ycbcr_to_rgb(2.0, 0.5, 0.5), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_roundtrip_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let rgb = Rgb::new(r, g, b);
                    let ycc = rgb_to_ycbcr(rgb);
                    let back = ycbcr_to_rgb(ycc.y, ycc.cb, ycc.cr);
                    assert!(
                        rgb.max_channel_diff(back) <= 1,
                        "{:?} -> {:?} -> {:?}",
                        rgb,
                        ycc,
                        back
                    );
                }
            }
        }
    }
}
