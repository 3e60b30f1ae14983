//! Reference shape candidates
//!
//! Given a stroke's corner set, synthesize the three idealized outlines
//! the classifier compares the stroke against. Rendering happens on
//! isolated masks created here; the caller's surface is never touched.

use crate::error::{RenderError, RenderResult};
use crate::shapes::{ellipse_outline_points, segment_points, square_outline_points};
use crate::target::render_points;
use strokeshape_core::{CornerSet, Mask, MaskMut, Point};

/// Options controlling reference shape synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceOptions {
    /// Stroke thickness of the rendered outlines, in pixels. The wide
    /// default tolerates hand-drawn wobble.
    pub stroke_width: u32,
    /// Minimum envelope width and height for the square and ellipse
    /// candidates. Below this, only the line candidate is rendered.
    pub min_shape_size: u32,
}

impl Default for ReferenceOptions {
    fn default() -> Self {
        Self {
            stroke_width: 25,
            min_shape_size: 10,
        }
    }
}

/// The three candidate outline masks, all sized like the input mask.
#[derive(Debug, Clone)]
pub struct ShapeCandidates {
    pub square: Mask,
    pub ellipse: Mask,
    pub line: Mask,
}

/// Render the three reference candidates for a corner set.
///
/// `width` and `height` are the dimensions of the user's mask; all three
/// candidates match them. If the envelope is degenerate (below
/// `min_shape_size` in either dimension), the square and ellipse
/// candidates are all-clear and only the line candidate carries ink,
/// biasing classification toward `line` for dots and very short marks.
///
/// # Errors
///
/// Returns [`RenderError::CornerOutOfBounds`] if any anchor lies outside
/// the `width` x `height` target.
pub fn render_references(
    corners: &CornerSet,
    width: u32,
    height: u32,
    options: &ReferenceOptions,
) -> RenderResult<ShapeCandidates> {
    for p in [
        corners.leftmost,
        corners.topmost,
        corners.rightmost,
        corners.bottommost,
    ] {
        check_anchor(p, width, height)?;
    }

    let stroke_width = options.stroke_width.max(1);
    let degenerate = corners.bounds().is_degenerate(options.min_shape_size);

    let line = rasterize(width, height, &segment_points(corners, stroke_width));

    let (square, ellipse) = if degenerate {
        (Mask::new(width, height), Mask::new(width, height))
    } else {
        (
            rasterize(width, height, &square_outline_points(corners, stroke_width)),
            rasterize(width, height, &ellipse_outline_points(corners, stroke_width)),
        )
    };

    Ok(ShapeCandidates {
        square,
        ellipse,
        line,
    })
}

fn check_anchor(p: Point, width: u32, height: u32) -> RenderResult<()> {
    if p.x >= width || p.y >= height {
        return Err(RenderError::CornerOutOfBounds {
            x: p.x,
            y: p.y,
            width,
            height,
        });
    }
    Ok(())
}

fn rasterize(width: u32, height: u32, points: &[(i32, i32)]) -> Mask {
    let mut mask = MaskMut::new(width, height);
    render_points(&mut mask, points);
    mask.into()
}
