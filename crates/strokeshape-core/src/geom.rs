//! Stroke geometry: points, extremal corner sets, and bounding envelopes
//!
//! A stroke's envelope is described by the four extremal ink pixels found
//! during a row-major scan of its mask. The envelope is not a general
//! rectangle type; it exists only to anchor reference-shape construction.

/// A pixel position in mask coordinate space (x = column, y = row, 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The four extremal ink pixels of a stroke.
///
/// Each point is the first pixel encountered in row-major scan order that
/// achieves the extremal coordinate. The four points are anchors for
/// reference-shape construction; they are not necessarily distinct and not
/// necessarily geometric corners of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerSet {
    /// First pixel with the minimum column
    pub leftmost: Point,
    /// First pixel with the minimum row
    pub topmost: Point,
    /// First pixel with the maximum column
    pub rightmost: Point,
    /// First pixel with the maximum row
    pub bottommost: Point,
}

impl CornerSet {
    /// Derive the axis-aligned bounding envelope from the corner set.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x_min: self.leftmost.x,
            y_min: self.topmost.y,
            width: self.rightmost.x.saturating_sub(self.leftmost.x),
            height: self.bottommost.y.saturating_sub(self.topmost.y),
        }
    }
}

/// Axis-aligned bounding envelope of a stroke.
///
/// `width` and `height` are coordinate spans (`x_max - x_min`,
/// `y_max - y_min`), so a single ink pixel has zero width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: u32,
    pub y_min: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// A stroke is degenerate when its envelope is below the minimum size
    /// in either dimension. Degenerate strokes cannot meaningfully exhibit
    /// square or ellipse curvature.
    pub fn is_degenerate(&self, min_size: u32) -> bool {
        self.width < min_size || self.height < min_size
    }
}
