//! I/O regression test
//!
//! Round-trips masks through PBM and surfaces through PNG, both in
//! memory and through files under the regression output directory.

use std::io::Cursor;
use strokeshape_core::{Mask, MaskMut, Surface};
use strokeshape_io::{
    read_mask_file, read_pbm, read_surface_png, write_mask_file, write_pbm, write_surface_png,
};
use strokeshape_test::{RegParams, regout_dir};

fn diagonal_mask(size: u32) -> Mask {
    let mut m = MaskMut::new(size, size);
    for i in 0..size {
        m.set_pixel_unchecked(i, i);
    }
    m.into()
}

#[test]
fn io_reg() {
    let mut rp = RegParams::new("io");

    // --- Test 1: in-memory PBM round trip ---
    let mask = diagonal_mask(37);
    let mut buf = Vec::new();
    write_pbm(&mask, &mut buf).unwrap();
    let back = read_pbm(Cursor::new(buf.clone())).unwrap();
    rp.compare_masks(&mask, &back);

    // --- Test 2: PBM bytes are stable across writes ---
    let mut buf2 = Vec::new();
    write_pbm(&mask, &mut buf2).unwrap();
    rp.compare_strings(&buf, &buf2);

    // --- Test 3: file-based PBM round trip ---
    let path = format!("{}/io_roundtrip.pbm", regout_dir());
    write_mask_file(&mask, &path).unwrap();
    let back = read_mask_file(&path).unwrap();
    rp.compare_masks(&mask, &back);

    // --- Test 4: in-memory PNG round trip ---
    let mut surface = Surface::new(33, 21);
    surface.set_rgba(0, 0, 10, 20, 30, 40).unwrap();
    surface.set_rgba(32, 20, 200, 100, 50, 255).unwrap();
    surface.set_rgba(16, 10, 0, 0, 0, 1).unwrap();
    let mut png_buf = Vec::new();
    write_surface_png(&surface, &mut png_buf).unwrap();
    let back = read_surface_png(Cursor::new(png_buf)).unwrap();
    rp.compare_values(1.0, if surface == back { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: round-tripped surface extracts the same ink mask ---
    rp.compare_masks(&surface.to_mask(), &back.to_mask());

    // --- Test 6: malformed inputs are rejected ---
    rp.compare_values(
        1.0,
        if read_pbm(Cursor::new(b"P1\n2 2\n".to_vec())).is_err() {
            1.0
        } else {
            0.0
        },
        0.0,
    );
    rp.compare_values(
        1.0,
        if read_surface_png(Cursor::new(b"not a png".to_vec())).is_err() {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    assert!(rp.cleanup(), "io regression test failed");
}
