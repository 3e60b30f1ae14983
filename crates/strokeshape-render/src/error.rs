//! Error types for strokeshape-render

use thiserror::Error;

/// Errors that can occur while rasterizing reference shapes
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] strokeshape_core::Error),

    /// A corner anchor lies outside the target raster
    #[error("corner ({x}, {y}) outside {width}x{height} target")]
    CornerOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
