//! Synthetic stroke generation for tests
//!
//! Draws idealized user strokes onto a surface so end-to-end tests can
//! exercise the classifier without recorded input. The jitter helper
//! perturbs a point buffer with a seeded RNG, so jittered tests are
//! deterministic across runs.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use strokeshape_core::{CornerSet, Point, Surface};
use strokeshape_render::shapes::{ellipse_outline_points, segment_points, square_outline_points};
use strokeshape_render::stroke::wide_line_points;
use strokeshape_render::target::render_points;

/// Draw a box-shaped stroke through the corner set's envelope.
pub fn draw_square_stroke(surface: &mut Surface, corners: &CornerSet, pen_width: u32) {
    let pts = square_outline_points(corners, pen_width);
    render_points(surface, &pts);
}

/// Draw an elliptical stroke inscribed in the corner set's envelope.
pub fn draw_ellipse_stroke(surface: &mut Surface, corners: &CornerSet, pen_width: u32) {
    let pts = ellipse_outline_points(corners, pen_width);
    render_points(surface, &pts);
}

/// Draw a straight stroke between two points.
pub fn draw_line_stroke(surface: &mut Surface, from: Point, to: Point, pen_width: u32) {
    let pts = wide_line_points(
        from.x as i32,
        from.y as i32,
        to.x as i32,
        to.y as i32,
        pen_width.max(1),
    );
    render_points(surface, &pts);
}

/// Draw the segment a corner set's line candidate would trace.
pub fn draw_segment_stroke(surface: &mut Surface, corners: &CornerSet, pen_width: u32) {
    let pts = segment_points(corners, pen_width);
    render_points(surface, &pts);
}

/// Perturb each point by a uniform offset in `[-amplitude, amplitude]`.
///
/// Seeded, so the same inputs always produce the same wobble.
pub fn jitter_points(points: &[(i32, i32)], amplitude: i32, seed: u64) -> Vec<(i32, i32)> {
    if amplitude <= 0 {
        return points.to_vec();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    points
        .iter()
        .map(|&(x, y)| {
            (
                x + rng.random_range(-amplitude..=amplitude),
                y + rng.random_range(-amplitude..=amplitude),
            )
        })
        .collect()
}

/// A corner set for the axis-aligned box `(x1, y1)..(x2, y2)` with the
/// off-axis coordinates at the box midlines.
pub fn box_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> CornerSet {
    CornerSet {
        leftmost: Point::new(x1, (y1 + y2) / 2),
        topmost: Point::new((x1 + x2) / 2, y1),
        rightmost: Point::new(x2, (y1 + y2) / 2),
        bottommost: Point::new((x1 + x2) / 2, y2),
    }
}
