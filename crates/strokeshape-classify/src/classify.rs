//! The classification pipeline
//!
//! `classify_stroke` runs the full chain on a completed stroke: mask
//! extraction, corner extraction, reference synthesis, scoring, and the
//! argmin pick. Each call works on fresh, private rasters; the caller's
//! surface is only ever read.

use crate::bounds::extract_corners;
use crate::error::ClassifyResult;
use crate::score::{ErrorScores, score_candidates};
use std::fmt;
use strokeshape_core::{CornerSet, Surface};
use strokeshape_render::{ReferenceOptions, ShapeCandidates, render_references};

/// A recognized canonical shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Square,
    Ellipse,
    Line,
}

impl Shape {
    /// The lower-case label of the shape.
    pub fn label(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Ellipse => "ellipse",
            Shape::Line => "line",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Options for the classification pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyOptions {
    /// Reference shape synthesis parameters.
    pub reference: ReferenceOptions,
}

/// Everything the pipeline derived for one stroke.
///
/// Returned by [`classify_stroke_full`] for debugging and visualization;
/// plain callers use [`classify_stroke`] and only see the label.
#[derive(Debug, Clone)]
pub struct Classification {
    pub corners: CornerSet,
    pub candidates: ShapeCandidates,
    pub scores: ErrorScores,
    pub shape: Shape,
}

/// Classify a completed stroke on a surface.
///
/// Returns `Ok(None)` when the surface carries no ink at all; otherwise
/// the best-matching label. Deterministic: identical pixel buffers always
/// yield identical results.
pub fn classify_stroke(
    surface: &Surface,
    options: &ClassifyOptions,
) -> ClassifyResult<Option<Shape>> {
    Ok(classify_stroke_full(surface, options)?.map(|c| c.shape))
}

/// Classify a stroke and return all intermediate pipeline products.
pub fn classify_stroke_full(
    surface: &Surface,
    options: &ClassifyOptions,
) -> ClassifyResult<Option<Classification>> {
    let mask = surface.to_mask();
    let Some(corners) = extract_corners(&mask) else {
        return Ok(None);
    };
    let candidates =
        render_references(&corners, mask.width(), mask.height(), &options.reference)?;
    let scores = score_candidates(&mask, &candidates)?;
    Ok(Some(Classification {
        corners,
        candidates,
        scores,
        shape: scores.best(),
    }))
}
