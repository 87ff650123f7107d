//! Scene rasterization: flattens committed strokes onto an RGBA surface and
//! encodes the result as a PNG data URL.
//!
//! DESIGN
//! ======
//! Strokes are filled strictly in commit order, so later strokes paint over
//! earlier ones. Eraser strokes are filled with the background color — pixels
//! are painted over, never deleted, so geometry beneath an "erased" region
//! stays in history and would reappear under a transparent background. The
//! surface is allocated at the canvas's device pixel ratio so exports are not
//! blurred on high-density displays.
//!
//! Encoder settings are fixed: identical stroke history and pixel density
//! produce byte-identical output.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

use crate::geom::Rgb;
use crate::outline::{Vertex, stroke_outline};
use crate::stroke::Stroke;

/// Rasterization failure. The session maps these to a silent no-op; they
/// surface only to direct callers and tests.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The canvas rounds to zero device pixels.
    #[error("canvas has no pixels: {width}x{height} at dpr {dpr}")]
    EmptySurface { width: f64, height: f64, dpr: f64 },
    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// An offscreen RGBA surface at device resolution.
pub struct Surface {
    width: u32,
    height: u32,
    /// Scale from CSS pixels to device pixels.
    dpr: f64,
    pixels: Vec<u8>,
}

impl Surface {
    /// Allocate a surface of `width` x `height` CSS pixels at `dpr`, filled
    /// with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptySurface`] when the device dimensions
    /// round to zero.
    pub fn new(width: f64, height: f64, dpr: f64, background: Rgb) -> Result<Self, ExportError> {
        let device_w = (width * dpr).round();
        let device_h = (height * dpr).round();
        if !(device_w >= 1.0 && device_h >= 1.0) {
            return Err(ExportError::EmptySurface { width, height, dpr });
        }
        let device_w = device_w as u32;
        let device_h = device_h as u32;
        let mut pixels = Vec::with_capacity((device_w * device_h * 4) as usize);
        for _ in 0..device_w * device_h {
            pixels.extend_from_slice(&[background.r, background.g, background.b, 0xFF]);
        }
        Ok(Self { width: device_w, height: device_h, dpr, pixels })
    }

    /// Surface width in device pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in device pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color of the device pixel at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = ((y * self.width + x) * 4) as usize;
        Rgb { r: self.pixels[idx], g: self.pixels[idx + 1], b: self.pixels[idx + 2] }
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill a closed polygon (CSS-pixel vertices) using the nonzero winding
    /// rule.
    pub fn fill_polygon(&mut self, outline: &[Vertex], color: Rgb) {
        if outline.len() < 3 {
            return;
        }
        let pts: Vec<(f64, f64)> = outline
            .iter()
            .map(|v| (v.x * self.dpr, v.y * self.dpr))
            .collect();

        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;
        for &(_, y) in &pts {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let first_row = min_y.floor().max(0.0) as u32;
        let last_row = max_y.ceil().min(f64::from(self.height)) as u32;

        let mut crossings: Vec<(f64, i32)> = Vec::new();
        for row in first_row..last_row {
            let yc = f64::from(row) + 0.5;
            crossings.clear();
            for i in 0..pts.len() {
                let (ax, ay) = pts[i];
                let (bx, by) = pts[(i + 1) % pts.len()];
                if (ay <= yc && by > yc) || (by <= yc && ay > yc) {
                    let t = (yc - ay) / (by - ay);
                    crossings.push((ax + t * (bx - ax), if by > ay { 1 } else { -1 }));
                }
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            let mut span_start = 0.0;
            for &(x, w) in &crossings {
                if winding == 0 {
                    span_start = x;
                }
                winding += w;
                if winding == 0 {
                    self.fill_span(row, span_start, x, color);
                }
            }
        }
    }

    /// Fill the pixels of `row` whose centers fall inside `[x0, x1)`.
    fn fill_span(&mut self, row: u32, x0: f64, x1: f64, color: Rgb) {
        let first = (x0 - 0.5).ceil().max(0.0);
        let last = (x1 - 0.5).floor().min(f64::from(self.width) - 1.0);
        if last < first {
            return;
        }
        let first = first as u32;
        let last = last as u32;
        for px in first..=last {
            let idx = ((row * self.width + px) * 4) as usize;
            self.pixels[idx] = color.r;
            self.pixels[idx + 1] = color.g;
            self.pixels[idx + 2] = color.b;
            self.pixels[idx + 3] = 0xFF;
        }
    }

    /// Encode the surface as PNG bytes with fixed, deterministic settings.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Encode`] if the encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(bytes)
    }

    /// Encode the surface as a `data:image/png;base64,…` string — the
    /// embedded-bitmap text encoding the note store persists verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Encode`] if PNG encoding fails.
    pub fn to_data_url(&self) -> Result<String, ExportError> {
        Ok(format!("data:image/png;base64,{}", BASE64.encode(self.encode_png()?)))
    }
}

/// Render committed strokes in commit order onto a fresh surface.
///
/// # Errors
///
/// Returns [`ExportError::EmptySurface`] when the canvas has no pixels.
pub fn render(
    strokes: &[Stroke],
    width: f64,
    height: f64,
    dpr: f64,
    background: Rgb,
) -> Result<Surface, ExportError> {
    let mut surface = Surface::new(width, height, dpr, background)?;
    for stroke in strokes {
        let color = if stroke.is_eraser { background } else { stroke.color };
        surface.fill_polygon(&stroke_outline(stroke), color);
    }
    Ok(surface)
}
