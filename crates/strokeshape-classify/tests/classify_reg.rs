//! End-to-end classification regression test
//!
//! Draws synthetic strokes onto a full-size surface and checks the
//! classifier's label and score ordering for each canonical shape, the
//! degenerate-mark policy, and determinism across scales.

use strokeshape_classify::{ClassifyOptions, Shape, classify_stroke, classify_stroke_full};
use strokeshape_core::{Point, Surface, SurfaceConfig};
use strokeshape_render::render_points;
use strokeshape_render::shapes::square_outline_points;
use strokeshape_test::strokes::{
    box_corners, draw_ellipse_stroke, draw_line_stroke, draw_square_stroke, jitter_points,
};
use strokeshape_test::RegParams;

fn shape_code(shape: Option<Shape>) -> f64 {
    match shape {
        None => 0.0,
        Some(Shape::Square) => 1.0,
        Some(Shape::Ellipse) => 2.0,
        Some(Shape::Line) => 3.0,
    }
}

#[test]
fn classify_reg() {
    let mut rp = RegParams::new("classify");
    let options = ClassifyOptions::default();
    let config = SurfaceConfig::default();

    // --- Test 1: box stroke classifies as square ---
    let mut surface = Surface::with_config(500, 400, &config);
    draw_square_stroke(&mut surface, &box_corners(100, 100, 400, 300), 5);
    let full = classify_stroke_full(&surface, &options)
        .unwrap()
        .expect("square stroke has ink");
    rp.compare_values(1.0, shape_code(Some(full.shape)), 0.0);
    // Its own score is the strict minimum
    rp.compare_values(
        1.0,
        if full.scores.square < full.scores.ellipse && full.scores.square < full.scores.line {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Test 2: elliptical stroke classifies as ellipse ---
    let mut surface = Surface::with_config(500, 400, &config);
    draw_ellipse_stroke(&mut surface, &box_corners(100, 100, 400, 300), 5);
    let label = classify_stroke(&surface, &options).unwrap();
    rp.compare_values(2.0, shape_code(label), 0.0);

    // --- Test 3: diagonal stroke classifies as line ---
    let mut surface = Surface::with_config(500, 400, &config);
    draw_line_stroke(&mut surface, Point::new(100, 100), Point::new(400, 300), 5);
    let label = classify_stroke(&surface, &options).unwrap();
    rp.compare_values(3.0, shape_code(label), 0.0);

    // --- Test 4: a small dot falls back to line ---
    let mut surface = Surface::with_config(500, 400, &config);
    for y in 200..203 {
        for x in 250..253 {
            surface.set_rgba(x, y, 255, 255, 255, 255).unwrap();
        }
    }
    let full = classify_stroke_full(&surface, &options)
        .unwrap()
        .expect("dot has ink");
    rp.compare_values(3.0, shape_code(Some(full.shape)), 0.0);
    rp.compare_values(0.0, full.scores.line as f64, 0.0);

    // --- Test 5: blank surface yields no label ---
    let surface = Surface::with_config(500, 400, &config);
    let label = classify_stroke(&surface, &options).unwrap();
    rp.compare_values(0.0, shape_code(label), 0.0);

    // --- Test 6: labels are stable across scale ---
    let mut small = Surface::new(250, 200);
    draw_square_stroke(&mut small, &box_corners(50, 50, 200, 150), 5);
    let mut large = Surface::with_config(500, 400, &config);
    draw_square_stroke(&mut large, &box_corners(100, 100, 400, 300), 5);
    let small_label = classify_stroke(&small, &options).unwrap();
    let large_label = classify_stroke(&large, &options).unwrap();
    rp.compare_values(shape_code(small_label), shape_code(large_label), 0.0);
    rp.compare_values(1.0, shape_code(small_label), 0.0);

    // --- Test 7: repeated runs agree exactly ---
    let mut surface = Surface::with_config(500, 400, &config);
    draw_ellipse_stroke(&mut surface, &box_corners(120, 80, 380, 320), 5);
    let a = classify_stroke_full(&surface, &options).unwrap().unwrap();
    let b = classify_stroke_full(&surface, &options).unwrap().unwrap();
    rp.compare_values(a.scores.square as f64, b.scores.square as f64, 0.0);
    rp.compare_values(a.scores.ellipse as f64, b.scores.ellipse as f64, 0.0);
    rp.compare_values(a.scores.line as f64, b.scores.line as f64, 0.0);
    rp.compare_values(shape_code(Some(a.shape)), shape_code(Some(b.shape)), 0.0);

    // --- Test 8: a wobbly hand-drawn box still reads as square ---
    let mut surface = Surface::with_config(500, 400, &config);
    let pts = square_outline_points(&box_corners(100, 100, 400, 300), 5);
    render_points(&mut surface, &jitter_points(&pts, 2, 1234));
    let label = classify_stroke(&surface, &options).unwrap();
    rp.compare_values(1.0, shape_code(label), 0.0);

    assert!(rp.cleanup(), "classify regression test failed");
}
