//! Error types for chroma operations

use thiserror::Error;

/// Result type for chroma operations
pub type ChromaResult<T> = Result<T, ChromaError>;

/// Errors that can occur while building or processing pixel buffers
#[derive(Error, Debug)]
pub enum ChromaError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Image codec error: {0}")]
    ImageCodec(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
