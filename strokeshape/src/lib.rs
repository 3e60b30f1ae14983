//! Strokeshape - Freehand stroke shape classification
//!
//! Classifies a single hand-drawn stroke as a **square**, an **ellipse**,
//! or a straight **line**.
//!
//! # Overview
//!
//! The pipeline rasterizes the stroke to a binary ink mask, finds the
//! four extremal ink pixels, renders idealized reference outlines fitted
//! to the resulting envelope, and picks the reference the ink disagrees
//! with least:
//!
//! - Binary mask and RGBA surface rasters ([`Mask`], [`Surface`])
//! - Reference outline synthesis ([`render`])
//! - Corner extraction, scoring, and classification ([`classify`])
//! - PBM / PNG serialization ([`io`])
//!
//! # Example
//!
//! ```
//! use strokeshape::classify::{ClassifyOptions, Shape, classify_stroke};
//! use strokeshape::Surface;
//!
//! let mut surface = Surface::new(220, 220);
//! for i in 10..=200 {
//!     surface.set_rgba(i, i, 255, 255, 255, 255).unwrap();
//! }
//! let label = classify_stroke(&surface, &ClassifyOptions::default()).unwrap();
//! assert_eq!(label, Some(Shape::Line));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use strokeshape_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use strokeshape_classify as classify;
pub use strokeshape_io as io;
pub use strokeshape_render as render;
