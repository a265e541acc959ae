//! Channel isolation: render each YCbCr and HSV channel on its own
//!
//! Each view keeps one channel from the source pixel and holds the other two
//! channels of its model at a fixed baseline:
//!
//! | view | reconstruction |
//! |------|----------------|
//! | Y    | `ycbcr_to_rgb(Y, 0.5, 0.5)` |
//! | Cb   | `ycbcr_to_rgb(0.5, Cb, 0.5)` |
//! | Cr   | `ycbcr_to_rgb(0.5, 0.5, Cr)` |
//! | H    | `hsv_to_rgb(H, 1, 1)` |
//! | S    | `hsv_to_rgb(0, S, 1)` |
//! | V    | `hsv_to_rgb(0, 0, V)` |

use crate::options::PipelineOptions;
use chroma_color::{hsv_to_rgb, rgb_to_hsv, rgb_to_ycbcr, ycbcr_to_rgb};
use chroma_core::consts::{BYTES_PER_PIXEL, NEUTRAL_CHROMA, NEUTRAL_LUMA};
use chroma_core::{Channel, ChromaResult, PixelBuffer, Rgb};
use rayon::prelude::*;

/// The six single-channel renderings of one source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolatedChannels {
    pub y: PixelBuffer,
    pub cb: PixelBuffer,
    pub cr: PixelBuffer,
    pub h: PixelBuffer,
    pub s: PixelBuffer,
    pub v: PixelBuffer,
}

impl IsolatedChannels {
    pub fn get(&self, channel: Channel) -> &PixelBuffer {
        match channel {
            Channel::Y => &self.y,
            Channel::Cb => &self.cb,
            Channel::Cr => &self.cr,
            Channel::H => &self.h,
            Channel::S => &self.s,
            Channel::V => &self.v,
        }
    }

    /// Buffers in [`Channel::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &PixelBuffer)> + '_ {
        Channel::ALL.into_iter().map(move |channel| (channel, self.get(channel)))
    }
}

/// Isolated renderings of a single color, indexed like [`Channel::ALL`]
pub fn isolate_pixel(rgb: Rgb) -> [Rgb; 6] {
    let ycc = rgb_to_ycbcr(rgb);
    let hsv = rgb_to_hsv(rgb);

    [
        ycbcr_to_rgb(ycc.y, NEUTRAL_CHROMA, NEUTRAL_CHROMA),
        ycbcr_to_rgb(NEUTRAL_LUMA, ycc.cb, NEUTRAL_CHROMA),
        ycbcr_to_rgb(NEUTRAL_LUMA, NEUTRAL_CHROMA, ycc.cr),
        hsv_to_rgb(hsv.h, 1.0, 1.0),
        hsv_to_rgb(0.0, hsv.s, 1.0),
        hsv_to_rgb(0.0, 0.0, hsv.v),
    ]
}

fn write_isolated(src: &[u8], planes: [&mut [u8]; 6]) {
    let views = isolate_pixel(Rgb::new(src[0], src[1], src[2]));
    for (dst, rgb) in planes.into_iter().zip(views) {
        dst[0] = rgb.r;
        dst[1] = rgb.g;
        dst[2] = rgb.b;
        dst[3] = src[3];
    }
}

/// Render all six channels of `buffer`
///
/// The result depends only on the source pixels, never on adjustments, so callers
/// only need to recompute it when a new image is loaded.
pub fn isolate_with(
    options: &PipelineOptions,
    buffer: &PixelBuffer,
) -> ChromaResult<IsolatedChannels> {
    let parallel = options.use_parallel(buffer.pixel_count());
    let _span = tracing::debug_span!(
        "isolate",
        width = buffer.width(),
        height = buffer.height(),
        parallel
    )
    .entered();

    let input = buffer.as_bytes();
    let mut planes: [Vec<u8>; 6] = std::array::from_fn(|_| vec![0u8; input.len()]);

    {
        let [y, cb, cr, h, s, v] = &mut planes;
        if parallel {
            (
                input.par_chunks_exact(BYTES_PER_PIXEL),
                y.par_chunks_exact_mut(BYTES_PER_PIXEL),
                cb.par_chunks_exact_mut(BYTES_PER_PIXEL),
                cr.par_chunks_exact_mut(BYTES_PER_PIXEL),
                h.par_chunks_exact_mut(BYTES_PER_PIXEL),
                s.par_chunks_exact_mut(BYTES_PER_PIXEL),
                v.par_chunks_exact_mut(BYTES_PER_PIXEL),
            )
                .into_par_iter()
                .for_each(|(src, y, cb, cr, h, s, v)| write_isolated(src, [y, cb, cr, h, s, v]));
        } else {
            for (i, src) in input.chunks_exact(BYTES_PER_PIXEL).enumerate() {
                let px = i * BYTES_PER_PIXEL..(i + 1) * BYTES_PER_PIXEL;
                write_isolated(
                    src,
                    [
                        &mut y[px.clone()],
                        &mut cb[px.clone()],
                        &mut cr[px.clone()],
                        &mut h[px.clone()],
                        &mut s[px.clone()],
                        &mut v[px],
                    ],
                );
            }
        }
    }

    let (width, height) = (buffer.width(), buffer.height());
    let [y, cb, cr, h, s, v] = planes;
    let channels = IsolatedChannels {
        y: PixelBuffer::from_raw(width, height, y)?,
        cb: PixelBuffer::from_raw(width, height, cb)?,
        cr: PixelBuffer::from_raw(width, height, cr)?,
        h: PixelBuffer::from_raw(width, height, h)?,
        s: PixelBuffer::from_raw(width, height, s)?,
        v: PixelBuffer::from_raw(width, height, v)?,
    };

    tracing::debug!(pixels = buffer.pixel_count(), "isolated channels");
    Ok(channels)
}

/// Render all six channels of `buffer` with default pipeline options
pub fn isolate(buffer: &PixelBuffer) -> ChromaResult<IsolatedChannels> {
    isolate_with(&PipelineOptions::default(), buffer)
}
