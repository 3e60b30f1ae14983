//! Rendering point buffers onto rasters
//!
//! Reference shapes are always rendered onto fresh, pipeline-private
//! masks; the only surface-writing operation here is the optional corner
//! marking debug affordance.

use crate::stroke::filled_square_points;
use strokeshape_core::{CornerSet, MaskMut, Surface};

/// Side length of the filled squares drawn by [`mark_corners`].
const CORNER_MARKER_SIDE: u32 = 5;

/// A raster that stroked primitives can be rendered onto.
pub trait RenderTarget {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Put ink at (x, y). Coordinates are guaranteed in bounds.
    fn put_ink(&mut self, x: u32, y: u32);
}

impl RenderTarget for MaskMut {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn put_ink(&mut self, x: u32, y: u32) {
        self.set_pixel_unchecked(x, y);
    }
}

impl RenderTarget for Surface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn put_ink(&mut self, x: u32, y: u32) {
        // Opaque white; any non-zero channel sum reads back as ink
        let _ = self.set_rgba(x, y, 255, 255, 255, 255);
    }
}

/// Render a point buffer onto a target, clipping out-of-bounds points.
pub fn render_points<T: RenderTarget>(target: &mut T, points: &[(i32, i32)]) {
    let (w, h) = target.dimensions();
    for &(x, y) in points {
        if x < 0 || x >= w as i32 || y < 0 || y >= h as i32 {
            continue;
        }
        target.put_ink(x as u32, y as u32);
    }
}

/// Mark the four extremal points on a surface with small filled squares.
///
/// Debug affordance for visualizing what the bounds extractor anchored
/// on. Never called by the classification pipeline itself, since marking
/// mutates the caller's surface.
pub fn mark_corners(surface: &mut Surface, corners: &CornerSet) {
    for p in [
        corners.leftmost,
        corners.topmost,
        corners.rightmost,
        corners.bottommost,
    ] {
        let pts = filled_square_points(p.x as i32, p.y as i32, CORNER_MARKER_SIDE);
        render_points(surface, &pts);
    }
}
