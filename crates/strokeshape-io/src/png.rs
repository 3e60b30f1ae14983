//! PNG format support for surfaces
//!
//! Surfaces round-trip as 8-bit RGBA PNG; the encoded rows are exactly
//! the surface's byte layout. Reading accepts only the RGBA8 form since
//! the surface contract is four channels, 0-255.

use crate::error::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};
use strokeshape_core::Surface;

/// Read an RGBA8 PNG into a surface.
pub fn read_surface_png<R: BufRead + Seek>(reader: R) -> IoResult<Surface> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if color_type != ColorType::Rgba || bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "expected RGBA8 PNG, got {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    buf.truncate(output_info.buffer_size());
    Ok(Surface::from_raw(width, height, buf)?)
}

/// Write a surface as an RGBA8 PNG.
pub fn write_surface_png<W: Write>(surface: &Surface, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, surface.width(), surface.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(surface.as_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_round_trip() {
        let mut surface = Surface::new(17, 9);
        surface.set_rgba(0, 0, 1, 2, 3, 4).unwrap();
        surface.set_rgba(16, 8, 255, 254, 253, 252).unwrap();
        surface.set_rgba(8, 4, 0, 0, 0, 128).unwrap();

        let mut buf = Vec::new();
        write_surface_png(&surface, &mut buf).unwrap();
        let back = read_surface_png(Cursor::new(buf)).unwrap();
        assert_eq!(surface, back);
    }

    #[test]
    fn test_rejects_non_png() {
        let data = b"definitely not a png".to_vec();
        assert!(read_surface_png(Cursor::new(data)).is_err());
    }
}
