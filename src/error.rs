//! Error types for ndpixel

use thiserror::Error;

/// Result type alias for ndpixel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ndpixel operations
///
/// The numeric value type is total and never produces one of these;
/// errors exist only where a vector or buffer fails the explicit length
/// checks of the transform and op layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Coordinate vector shorter than the transform's dimensionality
    #[error("Vector too small: transform maps {dims} dimensions, vector holds {len}")]
    VectorTooSmall {
        /// Dimensionality of the transform
        dims: usize,
        /// Components available in the offending vector
        len: usize,
    },

    /// Input and output buffers disagree in length
    #[error("Buffer length mismatch: input holds {input} samples, output holds {output}")]
    BufferLengthMismatch {
        /// Input buffer length
        input: usize,
        /// Output buffer length
        output: usize,
    },
}
