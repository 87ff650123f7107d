use super::*;
use crate::geom::Point;
use crate::stroke::Stroke;

// =============================================================
// Helpers
// =============================================================

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
const RED: Rgb = Rgb { r: 200, g: 40, b: 40 };
const BLUE: Rgb = Rgb { r: 40, g: 40, b: 200 };

fn across_stroke(color: Rgb, size: f64, is_eraser: bool) -> Stroke {
    Stroke {
        points: vec![Point::new(2.0, 5.0, 1.0), Point::new(8.0, 5.0, 1.0)],
        color,
        size,
        is_eraser,
    }
}

// =============================================================
// Surface
// =============================================================

#[test]
fn surface_starts_as_background() {
    let surface = Surface::new(4.0, 4.0, 1.0, WHITE).unwrap();
    assert_eq!(surface.width(), 4);
    assert_eq!(surface.height(), 4);
    assert_eq!(surface.pixel(0, 0), WHITE);
    assert_eq!(surface.pixel(3, 3), WHITE);
}

#[test]
fn surface_scales_by_device_pixel_ratio() {
    let surface = Surface::new(10.0, 10.0, 2.0, WHITE).unwrap();
    assert_eq!(surface.width(), 20);
    assert_eq!(surface.height(), 20);
}

#[test]
fn zero_sized_surface_is_an_error() {
    assert!(matches!(
        Surface::new(0.0, 10.0, 1.0, WHITE),
        Err(ExportError::EmptySurface { .. })
    ));
    assert!(matches!(
        Surface::new(10.0, 10.0, 0.0, WHITE),
        Err(ExportError::EmptySurface { .. })
    ));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn stroke_paints_pixels_under_its_path() {
    let surface = render(&[across_stroke(BLACK, 4.0, false)], 10.0, 10.0, 1.0, WHITE).unwrap();
    assert_eq!(surface.pixel(5, 5), BLACK);
    // Far corner stays background.
    assert_eq!(surface.pixel(0, 0), WHITE);
    assert_eq!(surface.pixel(9, 9), WHITE);
}

#[test]
fn later_strokes_paint_over_earlier_ones() {
    let strokes = [across_stroke(RED, 4.0, false), across_stroke(BLUE, 4.0, false)];
    let surface = render(&strokes, 10.0, 10.0, 1.0, WHITE).unwrap();
    assert_eq!(surface.pixel(5, 5), BLUE);
}

#[test]
fn eraser_paints_the_background_color() {
    let strokes = [across_stroke(BLACK, 4.0, false), across_stroke(BLACK, 6.0, true)];
    let surface = render(&strokes, 10.0, 10.0, 1.0, WHITE).unwrap();
    assert_eq!(surface.pixel(5, 5), WHITE);
}

#[test]
fn empty_scene_renders_plain_background() {
    let surface = render(&[], 10.0, 10.0, 1.0, WHITE).unwrap();
    assert!(surface.pixels().chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn export_is_deterministic() {
    let strokes = [across_stroke(BLACK, 4.0, false), across_stroke(RED, 3.0, false)];
    let a = render(&strokes, 10.0, 10.0, 2.0, WHITE).unwrap();
    let b = render(&strokes, 10.0, 10.0, 2.0, WHITE).unwrap();
    assert_eq!(a.pixels(), b.pixels());
    assert_eq!(a.encode_png().unwrap(), b.encode_png().unwrap());
}

#[test]
fn data_url_has_the_embedded_png_prefix() {
    let surface = render(&[], 4.0, 4.0, 1.0, WHITE).unwrap();
    let url = surface.to_data_url().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
    assert!(url.len() > "data:image/png;base64,".len());
}
