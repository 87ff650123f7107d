//! Pen/eraser tools and per-tool settings.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use crate::consts::{DEFAULT_ERASER_SIZE, DEFAULT_PEN_COLOR, DEFAULT_PEN_SIZE};
use crate::geom::Rgb;

/// Which drawing tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand pen (default).
    #[default]
    Pen,
    /// Eraser; paints in the canvas background color.
    Eraser,
}

/// Active tool plus per-tool settings.
///
/// Pen and eraser sizes are independent: adjusting one never affects the
/// other, and switching tools leaves both untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pub tool: Tool,
    pub pen_size: f64,
    pub eraser_size: f64,
    pub pen_color: Rgb,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            pen_size: DEFAULT_PEN_SIZE,
            eraser_size: DEFAULT_ERASER_SIZE,
            pen_color: DEFAULT_PEN_COLOR,
        }
    }
}

impl ToolState {
    /// Diameter of the active tool.
    #[must_use]
    pub fn active_size(&self) -> f64 {
        match self.tool {
            Tool::Pen => self.pen_size,
            Tool::Eraser => self.eraser_size,
        }
    }

    /// Set the size of the active tool, leaving the other tool's size alone.
    pub fn set_size(&mut self, size: f64) {
        match self.tool {
            Tool::Pen => self.pen_size = size,
            Tool::Eraser => self.eraser_size = size,
        }
    }
}
