//! Error types for strokeshape-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal representation details.

use thiserror::Error;

/// Strokeshape core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinates outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw buffer length does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
