//! strokeshape-classify - Freehand stroke shape classification
//!
//! Classifies a single rasterized stroke as a square, an ellipse, or a
//! straight line by comparing its ink against synthetically rendered
//! reference outlines fitted to the stroke's bounding envelope.
//!
//! # Quick start
//!
//! ```
//! use strokeshape_classify::{ClassifyOptions, Shape, classify_stroke};
//! use strokeshape_core::Surface;
//!
//! let mut surface = Surface::new(220, 220);
//! for i in 10..=200 {
//!     surface.set_rgba(i, i, 255, 255, 255, 255).unwrap();
//! }
//! let label = classify_stroke(&surface, &ClassifyOptions::default()).unwrap();
//! assert_eq!(label, Some(Shape::Line));
//! ```
//!
//! # Pipeline
//!
//! 1. [`Surface::to_mask`](strokeshape_core::Surface::to_mask) - binary
//!    ink mask extraction
//! 2. [`extract_corners`] - extremal pixel scan
//! 3. [`render_references`](strokeshape_render::render_references) -
//!    candidate outline synthesis
//! 4. [`score_candidates`] - cross-vote disagreement scores
//! 5. [`ErrorScores::best`] - argmin with a fixed tie order
//!
//! Steps 2-4 are public as debug hooks; most callers only need
//! [`classify_stroke`].

pub mod bounds;
pub mod classify;
mod error;
pub mod score;

pub use bounds::extract_corners;
pub use classify::{
    Classification, ClassifyOptions, Shape, classify_stroke, classify_stroke_full,
};
pub use error::{ClassifyError, ClassifyResult};
pub use score::{ErrorScores, score_candidates};

// Re-export the neighboring crates for convenience
pub use strokeshape_core;
pub use strokeshape_render;
