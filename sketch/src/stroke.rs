//! Committed stroke data.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rgb};

/// One continuous pointer-down-to-pointer-up drawing gesture.
///
/// Immutable once committed; owned exclusively by the session that captured
/// it. Strokes are never persisted independently — only the rasterized scene
/// leaves the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Recorded samples in capture order.
    pub points: Vec<Point>,
    /// Fill color. Ignored by the renderer when `is_eraser` is set.
    pub color: Rgb,
    /// Tool diameter in CSS pixels at full pressure.
    pub size: f64,
    /// Eraser strokes are filled with the canvas background color rather
    /// than deleting pixels beneath them.
    pub is_eraser: bool,
}
