//! Drawing surfaces
//!
//! [`Surface`] is the readable pixel buffer the classifier samples: a
//! row-major RGBA8 buffer, 4 bytes per pixel, channel values 0-255. A
//! pixel carries ink iff the sum of its four channel values is non-zero,
//! so any visible mark counts regardless of color or opacity.
//!
//! The pipeline only ever reads a surface. Drawing onto one is the
//! collaborator's business (or, in tests, the stroke synthesis helpers).

use crate::error::{Error, Result};
use crate::mask::{Mask, MaskMut};

/// Bytes per pixel in the surface buffer (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Limits on the renderable surface size.
///
/// The hosting environment clamps its drawing area to these caps; defaults
/// match the reference host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            max_width: 500,
            max_height: 400,
        }
    }
}

/// An owned RGBA8 drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Create a fully transparent (no ink) surface. Zero dimensions are
    /// allowed and represent an unreadable or not-yet-laid-out surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    /// Create a surface clamped to the configured maximum size.
    pub fn with_config(width: u32, height: u32, config: &SurfaceConfig) -> Self {
        Self::new(width.min(config.max_width), height.min(config.max_height))
    }

    /// Wrap an existing RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the RGBA values at (x, y), or `None` if out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some((
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Set the RGBA values at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if the coordinates are outside
    /// the surface.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
        self.data[i + 3] = a;
        Ok(())
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Extract the binary ink mask.
    ///
    /// A pixel is set iff `r + g + b + a > 0`. Deterministic: identical
    /// surfaces always yield identical masks. A zero-area surface yields a
    /// zero-area mask.
    pub fn to_mask(&self) -> Mask {
        let mut mask = MaskMut::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let i = self.offset(x, y);
                let sum = self.data[i] as u32
                    + self.data[i + 1] as u32
                    + self.data[i + 2] as u32
                    + self.data[i + 3] as u32;
                if sum > 0 {
                    mask.set_pixel_unchecked(x, y);
                }
            }
        }
        mask.into()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}
