//! Pipeline execution options

/// Images smaller than this (64x64) are processed on the calling thread
pub const DEFAULT_MIN_PARALLEL_PIXELS: usize = 64 * 64;

/// Options controlling how the per-pixel loops are executed
///
/// Every pixel is transformed independently, so the choice only affects
/// throughput: sequential and parallel runs produce identical buffers.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Spread pixels across the rayon thread pool
    pub parallel: bool,
    /// Minimum pixel count before the parallel path is taken
    pub min_parallel_pixels: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_pixels: DEFAULT_MIN_PARALLEL_PIXELS,
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always run on the calling thread
    pub fn sequential() -> Self {
        Self::default().parallel(false)
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_parallel_pixels(mut self, pixels: usize) -> Self {
        self.min_parallel_pixels = pixels;
        self
    }

    pub(crate) fn use_parallel(&self, pixel_count: usize) -> bool {
        self.parallel && pixel_count >= self.min_parallel_pixels
    }
}
