//! Point generation for stroked primitives
//!
//! Primitives are generated as point buffers in signed coordinates and
//! clipped to the target raster only at render time, so shapes anchored
//! near an edge keep their geometry.

/// Generate the points of a line using Bresenham's integer algorithm.
///
/// No floating-point arithmetic; the line connects `(x1, y1)` to
/// `(x2, y2)` with 8-connectivity.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    // Degenerate case: single point
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

/// Generate the points of a line with the specified stroke width.
///
/// For width > 1, parallel lines are laid down alternately on both sides
/// of the base line, offset perpendicular to its dominant direction.
pub fn wide_line_points(x1: i32, y1: i32, x2: i32, y2: i32, width: u32) -> Vec<(i32, i32)> {
    let width = width.max(1);
    let base = line_points(x1, y1, x2, y2);

    if width == 1 {
        return base;
    }

    let mut pts = Vec::with_capacity(base.len() * width as usize);
    pts.extend_from_slice(&base);

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let is_horizontal = dx > dy;

    for i in 1..width {
        // Alternate sides so the band stays centered on the base line
        let offset = ((i + 1) / 2) as i32;
        let sign = if i % 2 == 1 { -1 } else { 1 };
        let actual_offset = offset * sign;

        let (x1a, y1a, x2a, y2a) = if is_horizontal {
            // Offset in y direction
            (x1, y1 + actual_offset, x2, y2 + actual_offset)
        } else {
            // Offset in x direction
            (x1 + actual_offset, y1, x2 + actual_offset, y2)
        };

        pts.extend(line_points(x1a, y1a, x2a, y2a));
    }

    pts
}

/// Generate all points of a `side` x `side` filled square whose top-left
/// corner is at `(x, y)`.
pub fn filled_square_points(x: i32, y: i32, side: u32) -> Vec<(i32, i32)> {
    let mut pts = Vec::with_capacity((side * side) as usize);
    for dy in 0..side as i32 {
        for dx in 0..side as i32 {
            pts.push((x + dx, y + dy));
        }
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endpoints_present() {
        let pts = line_points(3, 4, 40, 11);
        assert_eq!(pts.first(), Some(&(3, 4)));
        assert_eq!(pts.last(), Some(&(40, 11)));
        // One point per column for a horizontal-dominant line
        assert_eq!(pts.len(), 38);
    }

    #[test]
    fn test_line_single_point() {
        assert_eq!(line_points(5, 5, 5, 5), vec![(5, 5)]);
    }

    #[test]
    fn test_line_vertical_dominant() {
        let pts = line_points(0, 0, 2, 10);
        assert_eq!(pts.len(), 11);
        assert_eq!(pts.last(), Some(&(2, 10)));
    }

    #[test]
    fn test_wide_line_covers_width() {
        let pts = wide_line_points(0, 10, 20, 10, 5);
        // A horizontal line of width 5 spans rows 8..=12 at every column
        for x in 0..=20 {
            for y in 8..=12 {
                assert!(pts.contains(&(x, y)), "missing ({x}, {y})");
            }
        }
        assert!(!pts.contains(&(0, 7)));
        assert!(!pts.contains(&(0, 13)));
    }

    #[test]
    fn test_wide_line_width_one_is_base() {
        assert_eq!(
            wide_line_points(0, 0, 9, 9, 1),
            line_points(0, 0, 9, 9)
        );
    }

    #[test]
    fn test_filled_square() {
        let pts = filled_square_points(2, 3, 3);
        assert_eq!(pts.len(), 9);
        assert!(pts.contains(&(2, 3)));
        assert!(pts.contains(&(4, 5)));
    }
}
