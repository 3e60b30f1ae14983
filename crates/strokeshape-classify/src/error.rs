//! Error types for strokeshape-classify

use thiserror::Error;

/// Errors that can occur during stroke classification
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] strokeshape_core::Error),

    /// Reference rendering error
    #[error("render error: {0}")]
    Render(#[from] strokeshape_render::RenderError),

    /// Candidate mask dimensions do not match the user mask
    #[error("candidate size mismatch: user mask {}x{}, candidate {}x{}", .user.0, .user.1, .candidate.0, .candidate.1)]
    CandidateSizeMismatch {
        user: (u32, u32),
        candidate: (u32, u32),
    },
}

/// Result type for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
