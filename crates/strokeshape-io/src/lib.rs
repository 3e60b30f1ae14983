//! strokeshape-io - Mask and surface serialization
//!
//! Formats are feature-gated:
//!
//! - `pbm` (default): binary PBM (P4) for 1 bpp masks
//! - `png-format` (default): RGBA8 PNG for surfaces, via the `png` crate
//!
//! Convenience path-based wrappers are provided alongside the
//! reader/writer functions in each format module.

mod error;

#[cfg(feature = "pbm")]
pub mod pbm;

#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};

#[cfg(feature = "pbm")]
pub use pbm::{read_pbm, write_pbm};

#[cfg(feature = "png-format")]
pub use self::png::{read_surface_png, write_surface_png};

#[cfg(any(feature = "pbm", feature = "png-format"))]
use std::fs::File;
#[cfg(any(feature = "pbm", feature = "png-format"))]
use std::io::{BufReader, BufWriter};
#[cfg(any(feature = "pbm", feature = "png-format"))]
use std::path::Path;
#[cfg(feature = "pbm")]
use strokeshape_core::Mask;
#[cfg(feature = "png-format")]
use strokeshape_core::Surface;

/// Read a mask from a PBM file.
#[cfg(feature = "pbm")]
pub fn read_mask_file<P: AsRef<Path>>(path: P) -> IoResult<Mask> {
    let file = File::open(path)?;
    read_pbm(BufReader::new(file))
}

/// Write a mask to a PBM file.
#[cfg(feature = "pbm")]
pub fn write_mask_file<P: AsRef<Path>>(mask: &Mask, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_pbm(mask, BufWriter::new(file))
}

/// Read a surface from an RGBA8 PNG file.
#[cfg(feature = "png-format")]
pub fn read_surface_file<P: AsRef<Path>>(path: P) -> IoResult<Surface> {
    let file = File::open(path)?;
    read_surface_png(BufReader::new(file))
}

/// Write a surface to an RGBA8 PNG file.
#[cfg(feature = "png-format")]
pub fn write_surface_file<P: AsRef<Path>>(surface: &Surface, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_surface_png(surface, BufWriter::new(file))
}
