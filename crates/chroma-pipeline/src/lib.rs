//! Batch pipelines over RGBA pixel buffers
//!
//! - [`process`]: convert every pixel to YCbCr or HSV, scale its channels, convert back
//! - [`isolate`]: render each of the six YCbCr/HSV channels on its own
//!
//! Both take the source buffer by reference and return freshly allocated buffers
//! of the same dimensions, copying alpha through untouched.

pub mod adjust;
pub mod isolate;
pub mod options;

pub use adjust::{adjust_hsv, adjust_pixel, adjust_ycbcr, process, process_with};
pub use isolate::{isolate, isolate_pixel, isolate_with, IsolatedChannels};
pub use options::PipelineOptions;

use chroma_core::{Adjustments, ChromaResult, ColorModel, PixelBuffer};

/// Pipeline runner holding execution options
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Adjust `buffer` in `model` using the matching half of `adjustments`
    pub fn process(
        &self,
        buffer: &PixelBuffer,
        model: ColorModel,
        adjustments: &Adjustments,
    ) -> ChromaResult<PixelBuffer> {
        process_with(&self.options, buffer, model, adjustments)
    }

    /// Render the six isolated channel views of `buffer`
    pub fn isolate(&self, buffer: &PixelBuffer) -> ChromaResult<IsolatedChannels> {
        isolate_with(&self.options, buffer)
    }
}
