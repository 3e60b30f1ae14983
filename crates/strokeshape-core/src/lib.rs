//! Strokeshape Core - Basic data structures for stroke classification
//!
//! This crate provides the fundamental data structures used throughout
//! the strokeshape workspace:
//!
//! - [`Surface`] - RGBA8 drawing surface (the readable pixel buffer)
//! - [`Mask`] / [`MaskMut`] - packed binary ink mask (immutable / mutable)
//! - [`Point`] / [`CornerSet`] / [`Bounds`] - stroke envelope geometry
//!
//! A completed stroke flows through these types in order: the surface is
//! sampled into a mask, the mask's extremal pixels form a corner set, and
//! the corner set anchors the synthetic reference shapes the classifier
//! compares against.

pub mod error;
pub mod geom;
pub mod mask;
pub mod surface;

pub use error::{Error, Result};
pub use geom::{Bounds, CornerSet, Point};
pub use mask::{Mask, MaskMut};
pub use surface::{BYTES_PER_PIXEL, Surface, SurfaceConfig};
