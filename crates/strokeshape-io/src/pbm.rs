//! PBM (Portable Bitmap, P4 binary) format support
//!
//! Binary masks serialize naturally as raw PBM: one bit per pixel,
//! MSB-first within each byte, rows padded to a byte boundary. Set mask
//! pixels map to PBM black (1).
//!
//! ASCII PBM (P1) is not supported.

use crate::error::{IoError, IoResult};
use std::io::{BufRead, Write};
use strokeshape_core::{Mask, MaskMut};

/// Read a binary PBM (P4) mask from a reader.
pub fn read_pbm<R: BufRead>(mut reader: R) -> IoResult<Mask> {
    let magic = [next_header_byte(&mut reader)?, next_header_byte(&mut reader)?];
    if &magic != b"P4" {
        return Err(IoError::UnsupportedFormat(format!(
            "expected P4 magic, got {:?}",
            String::from_utf8_lossy(&magic)
        )));
    }

    let width = next_header_value(&mut reader)?;
    let height = next_header_value(&mut reader)?;

    let bytes_per_row = width.div_ceil(8) as usize;
    let mut row = vec![0u8; bytes_per_row];
    let mut mask = MaskMut::new(width, height);

    for y in 0..height {
        reader.read_exact(&mut row).map_err(|e| {
            IoError::DecodeError(format!("short PBM data at row {}: {}", y, e))
        })?;
        for x in 0..width {
            let byte = row[(x / 8) as usize];
            if (byte >> (7 - (x % 8))) & 1 != 0 {
                mask.set_pixel_unchecked(x, y);
            }
        }
    }

    Ok(mask.into())
}

/// Write a mask as binary PBM (P4) to a writer.
pub fn write_pbm<W: Write>(mask: &Mask, mut writer: W) -> IoResult<()> {
    let width = mask.width();
    let height = mask.height();
    write!(writer, "P4\n{} {}\n", width, height)?;

    let bytes_per_row = width.div_ceil(8) as usize;
    let mut row = vec![0u8; bytes_per_row];
    for y in 0..height {
        row.fill(0);
        for x in 0..width {
            if mask.get_pixel_unchecked(x, y) {
                row[(x / 8) as usize] |= 1 << (7 - (x % 8));
            }
        }
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Read one header byte, skipping `#` comments to end of line.
fn next_header_byte<R: BufRead>(reader: &mut R) -> IoResult<u8> {
    let mut byte = [0u8; 1];
    loop {
        reader.read_exact(&mut byte)?;
        if byte[0] == b'#' {
            let mut discard = Vec::new();
            reader.read_until(b'\n', &mut discard)?;
            continue;
        }
        return Ok(byte[0]);
    }
}

/// Parse the next whitespace-delimited unsigned decimal header value.
fn next_header_value<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    // Skip whitespace and comments
    let mut byte = next_header_byte(reader)?;
    while byte.is_ascii_whitespace() {
        byte = next_header_byte(reader)?;
    }

    let mut value: u64 = 0;
    let mut have_digit = false;
    while byte.is_ascii_digit() {
        have_digit = true;
        value = value * 10 + (byte - b'0') as u64;
        if value > u32::MAX as u64 {
            return Err(IoError::InvalidData("PBM dimension overflow".to_string()));
        }
        let mut next = [0u8; 1];
        match reader.read_exact(&mut next) {
            Ok(()) => byte = next[0],
            Err(_) => break,
        }
    }

    if !have_digit {
        return Err(IoError::InvalidData(format!(
            "expected PBM dimension, got byte {:#04x}",
            byte
        )));
    }
    Ok(value as u32)
}
