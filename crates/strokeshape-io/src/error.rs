//! I/O error types
//!
//! Provides a unified error type for mask and surface I/O. Format
//! modules map their underlying errors into `IoError` variants so
//! callers only handle one type.

use thiserror::Error;

/// Error type for mask and surface I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not in the expected format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The data is structurally invalid
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] strokeshape_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
