//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write a mask file
    #[error("failed to write mask '{path}': {message}")]
    MaskWrite { path: String, message: String },

    /// Failed to read a mask file
    #[error("failed to read mask '{path}': {message}")]
    MaskRead { path: String, message: String },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Mask comparison failed
    #[error("mask comparison failed at index {index}")]
    MaskMismatch { index: usize },

    /// File comparison failed
    #[error("file comparison failed at index {index}: {path}")]
    FileMismatch { index: usize, path: String },

    /// Golden file not found
    #[error("golden file not found: {path}")]
    GoldenNotFound { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
