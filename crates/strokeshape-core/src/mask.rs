//! Binary pixel masks
//!
//! [`Mask`] is the common currency of the classification pipeline: a 1 bpp
//! rectangular raster extracted from a drawing surface or synthesized by
//! the reference renderer.
//!
//! # Pixel layout
//!
//! - Bits are packed MSB to LSB within 32-bit words
//! - Every row starts on a 32-bit word boundary
//!
//! # Ownership model
//!
//! `Mask` is immutable once built and uses `Arc` for cheap cloning. To set
//! pixels, build through [`MaskMut`] (or convert with [`Mask::to_mut`] /
//! [`Mask::try_into_mut`]) and convert back with `Into<Mask>`.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal mask data
#[derive(Debug, PartialEq, Eq)]
struct MaskData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    /// Packed bit data, `wpl * height` words
    data: Vec<u32>,
}

impl MaskData {
    fn new(width: u32, height: u32) -> Self {
        let wpl = width.div_ceil(32);
        Self {
            width,
            height,
            wpl,
            data: vec![0; (wpl as usize) * (height as usize)],
        }
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> bool {
        let word = self.data[(y * self.wpl + x / 32) as usize];
        (word >> (31 - (x & 31))) & 1 != 0
    }
}

/// Immutable binary mask with shared ownership.
///
/// Zero-sized masks are legal; an unreadable or empty drawing surface maps
/// to an empty mask rather than an error.
#[derive(Debug, Clone)]
pub struct Mask {
    data: Arc<MaskData>,
}

impl Mask {
    /// Create an all-clear mask. Zero dimensions are allowed.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Arc::new(MaskData::new(width, height)),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.data.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.data.height
    }

    /// Words per line in the packed representation.
    pub fn wpl(&self) -> u32 {
        self.data.wpl
    }

    /// True if the mask has zero area.
    pub fn is_zero_area(&self) -> bool {
        self.data.width == 0 || self.data.height == 0
    }

    /// Get a pixel value, or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.data.width || y >= self.data.height {
            return None;
        }
        Some(self.data.get(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.data.width && y < self.data.height);
        self.data.get(x, y)
    }

    /// Count the set (ink) pixels.
    ///
    /// Pad bits beyond each row's width are never set, so a word-level
    /// popcount is exact.
    pub fn count_ink(&self) -> u64 {
        self.data
            .data
            .iter()
            .map(|w| w.count_ones() as u64)
            .sum()
    }

    /// Copy into a mutable mask.
    pub fn to_mut(&self) -> MaskMut {
        MaskMut {
            data: MaskData {
                width: self.data.width,
                height: self.data.height,
                wpl: self.data.wpl,
                data: self.data.data.clone(),
            },
        }
    }

    /// Convert into a mutable mask without copying if this is the only
    /// reference, otherwise returns `self` unchanged.
    pub fn try_into_mut(self) -> std::result::Result<MaskMut, Mask> {
        match Arc::try_unwrap(self.data) {
            Ok(data) => Ok(MaskMut { data }),
            Err(data) => Err(Mask { data }),
        }
    }
}

impl PartialEq for Mask {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for Mask {}

/// Mutable binary mask with exclusive ownership.
#[derive(Debug)]
pub struct MaskMut {
    data: MaskData,
}

impl MaskMut {
    /// Create an all-clear mutable mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: MaskData::new(width, height),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.data.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.data.height
    }

    /// Get a pixel value, or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.data.width || y >= self.data.height {
            return None;
        }
        Some(self.data.get(x, y))
    }

    /// Set or clear a pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if the coordinates are outside
    /// the mask.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: bool) -> Result<()> {
        if x >= self.data.width || y >= self.data.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.data.width,
                height: self.data.height,
            });
        }
        self.put(x, y, val);
        Ok(())
    }

    /// Set a pixel to ink without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32) {
        debug_assert!(x < self.data.width && y < self.data.height);
        self.put(x, y, true);
    }

    /// Clear all pixels.
    pub fn clear(&mut self) {
        self.data.data.fill(0);
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, val: bool) {
        let idx = (y * self.data.wpl + x / 32) as usize;
        let bit = 1u32 << (31 - (x & 31));
        if val {
            self.data.data[idx] |= bit;
        } else {
            self.data.data[idx] &= !bit;
        }
    }
}

impl From<MaskMut> for Mask {
    fn from(m: MaskMut) -> Self {
        Mask {
            data: Arc::new(m.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mask_is_clear() {
        let mask = Mask::new(100, 40);
        assert_eq!(mask.width(), 100);
        assert_eq!(mask.height(), 40);
        assert_eq!(mask.count_ink(), 0);
        assert_eq!(mask.get_pixel(99, 39), Some(false));
        assert_eq!(mask.get_pixel(100, 0), None);
    }

    #[test]
    fn test_set_and_get_across_word_boundary() {
        let mut m = MaskMut::new(70, 3);
        // Bits 31/32 of a row straddle the first word boundary
        m.set_pixel(31, 1, true).unwrap();
        m.set_pixel(32, 1, true).unwrap();
        m.set_pixel(69, 2, true).unwrap();
        let mask: Mask = m.into();
        assert_eq!(mask.get_pixel(31, 1), Some(true));
        assert_eq!(mask.get_pixel(32, 1), Some(true));
        assert_eq!(mask.get_pixel(69, 2), Some(true));
        assert_eq!(mask.get_pixel(30, 1), Some(false));
        assert_eq!(mask.count_ink(), 3);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut m = MaskMut::new(10, 10);
        assert!(m.set_pixel(10, 0, true).is_err());
        assert!(m.set_pixel(0, 10, true).is_err());
    }

    #[test]
    fn test_clear_pixel() {
        let mut m = MaskMut::new(8, 8);
        m.set_pixel(3, 3, true).unwrap();
        m.set_pixel(3, 3, false).unwrap();
        let mask: Mask = m.into();
        assert_eq!(mask.count_ink(), 0);
    }

    #[test]
    fn test_zero_area_mask() {
        let mask = Mask::new(0, 0);
        assert!(mask.is_zero_area());
        assert_eq!(mask.count_ink(), 0);
        assert_eq!(mask.get_pixel(0, 0), None);
    }

    #[test]
    fn test_equality_and_round_trip() {
        let mut m = MaskMut::new(33, 2);
        m.set_pixel(0, 0, true).unwrap();
        m.set_pixel(32, 1, true).unwrap();
        let a: Mask = m.into();
        let b = a.to_mut().into();
        assert_eq!(a, b);
        assert_ne!(a, Mask::new(33, 2));
    }

    #[test]
    fn test_try_into_mut_shared() {
        let a = Mask::new(4, 4);
        let b = a.clone();
        // Two references: conversion must fail and return the mask
        assert!(a.try_into_mut().is_err());
        assert!(b.try_into_mut().is_ok());
    }
}
