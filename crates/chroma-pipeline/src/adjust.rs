//! Pixel pipeline: convert, scale channels, convert back

use crate::options::PipelineOptions;
use chroma_color::{hsv_to_rgb, rgb_to_hsv, rgb_to_ycbcr, ycbcr_to_rgb};
use chroma_core::consts::{
    BYTES_PER_PIXEL, NEUTRAL_CHROMA, NEUTRAL_HUE, NEUTRAL_LUMA, NEUTRAL_SATURATION, NEUTRAL_VALUE,
    UNCHANGED_FACTOR,
};
use chroma_core::{
    Adjustments, ChromaResult, ColorModel, Hsv, HsvAdjustment, PixelBuffer, Rgb, Ycbcr,
    YcbcrAdjustment,
};
use rayon::prelude::*;

/// Scale `value` by `factor` percent, or return `neutral` when the factor is zero
fn scale_or_neutral(value: f64, factor: f64, neutral: f64) -> f64 {
    if factor > 0.0 {
        value * (factor / UNCHANGED_FACTOR)
    } else {
        neutral
    }
}

/// Scale the distance of `value` from `center` by `factor` percent
fn scale_about(value: f64, center: f64, factor: f64) -> f64 {
    if factor > 0.0 {
        center + (value - center) * (factor / UNCHANGED_FACTOR)
    } else {
        center
    }
}

/// Apply YCbCr factors to a single color
///
/// Y scales towards 0 and falls back to mid-gray luma at a zero factor; Cb and Cr
/// scale towards the no-chroma center.
pub fn adjust_ycbcr(ycc: Ycbcr, adjustment: &YcbcrAdjustment) -> Ycbcr {
    Ycbcr {
        y: scale_or_neutral(ycc.y, adjustment.y, NEUTRAL_LUMA),
        cb: scale_about(ycc.cb, NEUTRAL_CHROMA, adjustment.cb),
        cr: scale_about(ycc.cr, NEUTRAL_CHROMA, adjustment.cr),
    }
}

/// Apply HSV factors to a single color
///
/// A zero factor forces hue to 0, saturation to 0 and value to full brightness.
pub fn adjust_hsv(hsv: Hsv, adjustment: &HsvAdjustment) -> Hsv {
    Hsv {
        h: scale_or_neutral(hsv.h, adjustment.h, NEUTRAL_HUE),
        s: scale_or_neutral(hsv.s, adjustment.s, NEUTRAL_SATURATION),
        v: scale_or_neutral(hsv.v, adjustment.v, NEUTRAL_VALUE),
    }
}

/// Run one RGB color through the selected model's adjustment
pub fn adjust_pixel(rgb: Rgb, model: ColorModel, adjustments: &Adjustments) -> Rgb {
    match model {
        ColorModel::Ycbcr => {
            let ycc = adjust_ycbcr(rgb_to_ycbcr(rgb), &adjustments.ycbcr);
            ycbcr_to_rgb(ycc.y, ycc.cb, ycc.cr)
        }
        ColorModel::Hsv => {
            let hsv = adjust_hsv(rgb_to_hsv(rgb), &adjustments.hsv);
            hsv_to_rgb(hsv.h, hsv.s, hsv.v)
        }
    }
}

fn adjust_rgba(src: &[u8], dst: &mut [u8], model: ColorModel, adjustments: &Adjustments) {
    let rgb = adjust_pixel(Rgb::new(src[0], src[1], src[2]), model, adjustments);
    dst[0] = rgb.r;
    dst[1] = rgb.g;
    dst[2] = rgb.b;
    dst[3] = src[3];
}

/// Adjust every pixel of `buffer` in `model`, returning a new buffer
///
/// Alpha is copied unchanged. The input is never modified.
pub fn process_with(
    options: &PipelineOptions,
    buffer: &PixelBuffer,
    model: ColorModel,
    adjustments: &Adjustments,
) -> ChromaResult<PixelBuffer> {
    let parallel = options.use_parallel(buffer.pixel_count());
    let _span = tracing::debug_span!(
        "process",
        width = buffer.width(),
        height = buffer.height(),
        model = %model,
        parallel
    )
    .entered();

    let input = buffer.as_bytes();
    let mut output = vec![0u8; input.len()];

    if parallel {
        output
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(input.par_chunks_exact(BYTES_PER_PIXEL))
            .for_each(|(dst, src)| adjust_rgba(src, dst, model, adjustments));
    } else {
        for (dst, src) in output
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(input.chunks_exact(BYTES_PER_PIXEL))
        {
            adjust_rgba(src, dst, model, adjustments);
        }
    }

    tracing::debug!(pixels = buffer.pixel_count(), "adjusted image");
    PixelBuffer::from_raw(buffer.width(), buffer.height(), output)
}

/// Adjust every pixel of `buffer` with default pipeline options
pub fn process(
    buffer: &PixelBuffer,
    model: ColorModel,
    adjustments: &Adjustments,
) -> ChromaResult<PixelBuffer> {
    process_with(&PipelineOptions::default(), buffer, model, adjustments)
}
