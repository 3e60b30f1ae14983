//! Extremal pixel extraction
//!
//! A single row-major scan over the mask maintains four running extrema
//! and records the pixel that achieved each one. Updates are by strict
//! improvement, so among pixels sharing an extremal coordinate the first
//! encountered in scan order wins.
//!
//! Each extremum carries an explicit seen flag instead of treating
//! coordinate 0 as "unset", so strokes touching column 0 or row 0 are
//! tracked correctly.

use strokeshape_core::{CornerSet, Mask, Point};

/// Find the four extremal ink pixels of a mask.
///
/// Returns `None` when the mask contains no ink (including zero-area
/// masks). Idempotent: the same mask always yields the same corner set.
pub fn extract_corners(mask: &Mask) -> Option<CornerSet> {
    let width = mask.width();
    let height = mask.height();

    let mut seen = false;
    let mut x_min = 0;
    let mut y_min = 0;
    let mut x_max = 0;
    let mut y_max = 0;
    let mut leftmost = Point::default();
    let mut topmost = Point::default();
    let mut rightmost = Point::default();
    let mut bottommost = Point::default();

    for y in 0..height {
        for x in 0..width {
            if !mask.get_pixel_unchecked(x, y) {
                continue;
            }
            if !seen || x < x_min {
                x_min = x;
                leftmost = Point::new(x, y);
            }
            if !seen || y < y_min {
                y_min = y;
                topmost = Point::new(x, y);
            }
            if !seen || x > x_max {
                x_max = x;
                rightmost = Point::new(x, y);
            }
            if !seen || y > y_max {
                y_max = y;
                bottommost = Point::new(x, y);
            }
            seen = true;
        }
    }

    seen.then_some(CornerSet {
        leftmost,
        topmost,
        rightmost,
        bottommost,
    })
}
