//! strokeshape-render - Reference shape rasterization
//!
//! This crate turns a stroke's corner set into the three idealized
//! outline masks the classifier scores against:
//!
//! - **square**: the stroked outline of the envelope box
//! - **ellipse**: the stroked ring inscribed in the envelope
//! - **line**: the stroked segment between the raw leftmost and
//!   rightmost ink pixels
//!
//! # Quick start
//!
//! ```
//! use strokeshape_core::{CornerSet, Point};
//! use strokeshape_render::{ReferenceOptions, render_references};
//!
//! let corners = CornerSet {
//!     leftmost: Point::new(10, 100),
//!     topmost: Point::new(100, 10),
//!     rightmost: Point::new(190, 100),
//!     bottommost: Point::new(100, 190),
//! };
//! let candidates =
//!     render_references(&corners, 220, 220, &ReferenceOptions::default()).unwrap();
//! assert_eq!(candidates.square.width(), 220);
//! ```
//!
//! Lower-level point generators ([`stroke`], [`shapes`]) are public so
//! stroke synthesis in tests can reuse the same rasterization.

pub mod candidates;
mod error;
pub mod shapes;
pub mod stroke;
pub mod target;

pub use candidates::{ReferenceOptions, ShapeCandidates, render_references};
pub use error::{RenderError, RenderResult};
pub use target::{RenderTarget, mark_corners, render_points};

// Re-export core for convenience
pub use strokeshape_core;
