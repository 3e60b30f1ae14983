//! Idealized shape outlines anchored to a stroke's corner set
//!
//! Each generator produces the stroked outline of one canonical shape,
//! fitted to the envelope spanned by the extremal ink pixels. The wide
//! stroke (25 px by default) tolerates hand-drawn imprecision when the
//! outline is later compared against the user's ink.

use crate::stroke::wide_line_points;
use strokeshape_core::CornerSet;

/// Outline of the axis-aligned box spanned by the corner set.
///
/// A closed polyline through `(L.x, T.y) -> (L.x, B.y) -> (R.x, B.y) ->
/// (R.x, T.y)` and back. Horizontal edges are extended by half the stroke
/// width on both ends so the corners are fully covered, the way a stroked
/// path with joins covers them.
pub fn square_outline_points(corners: &CornerSet, stroke_width: u32) -> Vec<(i32, i32)> {
    let width = stroke_width.max(1);
    let x1 = corners.leftmost.x as i32;
    let y1 = corners.topmost.y as i32;
    let x2 = corners.rightmost.x as i32;
    let y2 = corners.bottommost.y as i32;
    let half = (width / 2) as i32;

    let mut pts = Vec::new();
    // Top and bottom edges, extended through the corners
    pts.extend(wide_line_points(x1 - half, y1, x2 + half, y1, width));
    pts.extend(wide_line_points(x1 - half, y2, x2 + half, y2, width));
    // Left and right edges
    pts.extend(wide_line_points(x1, y1, x1, y2, width));
    pts.extend(wide_line_points(x2, y1, x2, y2, width));
    pts
}

/// Outline of the ellipse inscribed in the corner set's envelope.
///
/// Centered at the midpoint of the horizontal and vertical extremes, with
/// radii of half the envelope spans. The ring is the area between the
/// ellipse grown and shrunk by half the stroke width per axis.
pub fn ellipse_outline_points(corners: &CornerSet, stroke_width: u32) -> Vec<(i32, i32)> {
    let cx = (corners.leftmost.x + corners.rightmost.x) as f32 / 2.0;
    let cy = (corners.topmost.y + corners.bottommost.y) as f32 / 2.0;
    let rx = (corners.rightmost.x - corners.leftmost.x) as f32 / 2.0;
    let ry = (corners.bottommost.y - corners.topmost.y) as f32 / 2.0;
    ellipse_ring_points(cx, cy, rx, ry, stroke_width)
}

/// The straight segment between the raw leftmost and rightmost ink pixels.
///
/// Uses the native y of both anchors, so the candidate is the diagonal
/// between the true extremal pixels, not a box edge.
pub fn segment_points(corners: &CornerSet, stroke_width: u32) -> Vec<(i32, i32)> {
    wide_line_points(
        corners.leftmost.x as i32,
        corners.leftmost.y as i32,
        corners.rightmost.x as i32,
        corners.rightmost.y as i32,
        stroke_width.max(1),
    )
}

/// Generate the points of an elliptical ring by annulus scan.
///
/// A pixel belongs to the ring when it lies inside the ellipse with radii
/// `(rx + w/2, ry + w/2)` and outside the one with radii
/// `(rx - w/2, ry - w/2)` (clamped at zero; a fully clamped inner ellipse
/// degenerates the ring to a filled ellipse).
pub fn ellipse_ring_points(cx: f32, cy: f32, rx: f32, ry: f32, stroke_width: u32) -> Vec<(i32, i32)> {
    if rx <= 0.0 || ry <= 0.0 {
        return Vec::new();
    }
    let half = stroke_width.max(1) as f32 / 2.0;
    let rox = rx + half;
    let roy = ry + half;
    let rix = (rx - half).max(0.0);
    let riy = (ry - half).max(0.0);

    let x_lo = (cx - rox).floor() as i32;
    let x_hi = (cx + rox).ceil() as i32;
    let y_lo = (cy - roy).floor() as i32;
    let y_hi = (cy + roy).ceil() as i32;

    let mut pts = Vec::new();
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let outer = (dx / rox).powi(2) + (dy / roy).powi(2);
            if outer > 1.0 {
                continue;
            }
            let inside_inner =
                rix > 0.0 && riy > 0.0 && (dx / rix).powi(2) + (dy / riy).powi(2) < 1.0;
            if !inside_inner {
                pts.push((x, y));
            }
        }
    }
    pts
}
