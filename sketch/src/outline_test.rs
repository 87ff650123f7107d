use super::*;
use crate::consts::{CAP_SEGMENTS, QUAD_FLATTEN_STEPS};
use crate::geom::{Point, Rgb};
use crate::stroke::Stroke;

// =============================================================
// Helpers
// =============================================================

fn pen_stroke(points: Vec<Point>, size: f64) -> Stroke {
    Stroke { points, color: Rgb { r: 0, g: 0, b: 0 }, size, is_eraser: false }
}

fn bounds(outline: &[Vertex]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for v in outline {
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }
    (min_x, min_y, max_x, max_y)
}

// =============================================================
// Degenerate inputs
// =============================================================

#[test]
fn empty_stroke_has_empty_outline() {
    let outline = stroke_outline(&pen_stroke(vec![], 8.0));
    assert!(outline.is_empty());
}

#[test]
fn single_point_becomes_a_dot() {
    let outline = stroke_outline(&pen_stroke(vec![Point::new(10.0, 10.0, 1.0)], 8.0));
    assert_eq!(outline.len(), CAP_SEGMENTS * 2);

    // Every vertex sits on the circle of the pressure-scaled radius.
    let r = 4.0;
    for v in &outline {
        let d = (v.x - 10.0).hypot(v.y - 10.0);
        assert!((d - r).abs() < 1e-9, "vertex at distance {d}, expected {r}");
    }
}

#[test]
fn coincident_samples_do_not_produce_nan() {
    let p = Point::plain(5.0, 5.0);
    let outline = stroke_outline(&pen_stroke(vec![p, p, p], 8.0));
    assert!(outline.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
}

// =============================================================
// Ribbon shape
// =============================================================

#[test]
fn horizontal_stroke_outline_encloses_the_path() {
    let size = 8.0;
    let outline = stroke_outline(&pen_stroke(
        vec![Point::new(10.0, 50.0, 1.0), Point::new(90.0, 50.0, 1.0)],
        size,
    ));
    let (min_x, min_y, max_x, max_y) = bounds(&outline);
    let r = size / 2.0;

    // The ribbon spans the path plus caps on either end, and is 2r tall.
    assert!(min_x < 10.0 && min_x > 10.0 - r - 1e-6);
    assert!(max_x > 90.0 && max_x < 90.0 + r + 1e-6);
    assert!(min_y >= 50.0 - r - 1e-6 && max_y <= 50.0 + r + 1e-6);
    assert!(max_y - min_y > r, "ribbon should have real height");
}

#[test]
fn higher_pressure_widens_the_outline() {
    let soft = stroke_outline(&pen_stroke(
        vec![Point::new(0.0, 0.0, 0.2), Point::new(100.0, 0.0, 0.2)],
        10.0,
    ));
    let hard = stroke_outline(&pen_stroke(
        vec![Point::new(0.0, 0.0, 1.0), Point::new(100.0, 0.0, 1.0)],
        10.0,
    ));
    let (_, soft_min_y, _, soft_max_y) = bounds(&soft);
    let (_, hard_min_y, _, hard_max_y) = bounds(&hard);
    assert!(hard_max_y - hard_min_y > soft_max_y - soft_min_y);
}

// =============================================================
// Smoothing
// =============================================================

#[test]
fn smoothing_flattens_to_a_fixed_vertex_count() {
    let points = vec![
        Point::plain(0.0, 0.0),
        Point::plain(10.0, 5.0),
        Point::plain(20.0, 0.0),
    ];
    let stroke = pen_stroke(points.clone(), 6.0);
    let control_count = points.len() * 2 + (CAP_SEGMENTS - 1) * 2;
    let outline = stroke_outline(&stroke);
    assert_eq!(outline.len(), control_count * QUAD_FLATTEN_STEPS);
}

#[test]
fn outline_is_deterministic() {
    let stroke = pen_stroke(
        vec![
            Point::new(1.0, 2.0, 0.4),
            Point::new(8.0, 3.0, 0.6),
            Point::new(14.0, 9.0, 0.9),
        ],
        8.0,
    );
    assert_eq!(stroke_outline(&stroke), stroke_outline(&stroke));
}
