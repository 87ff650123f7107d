//! The sketch session: gesture state machine, history, and export.
//!
//! DESIGN
//! ======
//! A session is created when the note composer mounts its canvas and dropped
//! when it closes. The session is a two-state machine — idle or capturing
//! exactly one stroke — and every operation runs synchronously on the event
//! that triggers it. Side effects are reported to the host as explicit
//! returned [`Update`] values rather than registered callbacks; the host
//! persists image payloads and repaints on `Update::Image`.
//!
//! ERROR HANDLING
//! ==============
//! Operations whose precondition fails (undo with empty history, extend with
//! no active stroke, begin while drawing) are silent no-ops. Export failure
//! degrades to "no image emitted"; nothing here retries or escalates.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::consts::BACKGROUND;
use crate::geom::{Point, Rgb};
use crate::history::History;
use crate::raster;
use crate::stroke::Stroke;
use crate::tool::{Tool, ToolState};

/// Keyboard modifier keys held during a key event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Result of a session operation, for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Nothing visible changed.
    None,
    /// The committed scene changed. `Some` carries the flattened canvas as
    /// an encoded-image string; `None` means the canvas is now empty.
    Image(Option<String>),
}

/// Gesture state: idle, or capturing one stroke.
#[derive(Debug, Clone)]
enum Gesture {
    Idle,
    Drawing {
        /// Pointer-down location, recorded ahead of the first sample.
        origin: Point,
        /// Samples recorded so far. Empty until the pointer moves.
        points: Vec<Point>,
        /// Tool settings captured at pointer-down, so mid-stroke setting
        /// changes don't alter the stroke being drawn.
        color: Rgb,
        size: f64,
        is_eraser: bool,
    },
}

/// A drawing-canvas session.
pub struct Session {
    history: History,
    gesture: Gesture,
    tools: ToolState,
    /// Canvas size in CSS pixels.
    width: f64,
    height: f64,
    /// Device pixel ratio used for export.
    dpr: f64,
    background: Rgb,
}

impl Session {
    /// Create a session for a canvas of `width` x `height` CSS pixels at
    /// device pixel ratio `dpr`.
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            history: History::new(),
            gesture: Gesture::Idle,
            tools: ToolState::default(),
            width,
            height,
            dpr,
            background: BACKGROUND,
        }
    }

    /// Update canvas dimensions and device pixel ratio (window resize or
    /// monitor change). Affects subsequent exports only.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
    }

    // --- Tools ---

    /// Current tool settings.
    #[must_use]
    pub fn tools(&self) -> ToolState {
        self.tools
    }

    /// Switch the active tool. Neither tool's size changes.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.tool = tool;
    }

    /// Set the active tool's size; the other tool's size is untouched.
    pub fn set_size(&mut self, size: f64) {
        self.tools.set_size(size);
    }

    /// Set the pen color.
    pub fn set_color(&mut self, color: Rgb) {
        self.tools.pen_color = color;
    }

    // --- Stroke capture ---

    /// Start a new stroke at `origin`. No-op if a stroke is already in
    /// progress.
    pub fn begin_stroke(&mut self, origin: Point) {
        if matches!(self.gesture, Gesture::Drawing { .. }) {
            return;
        }
        self.gesture = Gesture::Drawing {
            origin,
            points: Vec::new(),
            color: self.tools.pen_color,
            size: self.tools.active_size(),
            is_eraser: self.tools.tool == Tool::Eraser,
        };
    }

    /// Append a sample to the in-progress stroke. No-op while idle. The
    /// gesture origin is recorded ahead of the first sample so the stroke
    /// starts where the pointer went down.
    pub fn extend_stroke(&mut self, point: Point) {
        if let Gesture::Drawing { origin, points, .. } = &mut self.gesture {
            if points.is_empty() {
                points.push(*origin);
            }
            points.push(point);
        }
    }

    /// Finalize the in-progress stroke: commit it if it recorded any points,
    /// discard it otherwise (a pointer-down with no movement draws nothing).
    pub fn commit_stroke(&mut self) -> Update {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        let Gesture::Drawing { points, color, size, is_eraser, .. } = gesture else {
            return Update::None;
        };
        if points.is_empty() {
            return Update::None;
        }
        self.history.push(Stroke { points, color, size, is_eraser });
        self.image_update()
    }

    /// Discard the in-progress stroke without committing (pointer capture
    /// lost, multi-touch conflict).
    pub fn cancel_stroke(&mut self) {
        self.gesture = Gesture::Idle;
    }

    // --- History ---

    /// Undo the most recent committed stroke. No-op when history is empty.
    pub fn undo(&mut self) -> Update {
        if self.history.undo() { self.image_update() } else { Update::None }
    }

    /// Redo the most recently undone stroke. No-op when nothing is redoable.
    pub fn redo(&mut self) -> Update {
        if self.history.redo() { self.image_update() } else { Update::None }
    }

    /// Empty both history stacks and report a null image.
    pub fn clear(&mut self) -> Update {
        self.gesture = Gesture::Idle;
        self.history.clear();
        Update::Image(None)
    }

    /// Dispatch a keyboard shortcut. Undo/redo are global while the canvas
    /// is mounted; only one session is ever active at a time.
    pub fn on_key(&mut self, key: &str, modifiers: Modifiers) -> Update {
        if !(modifiers.ctrl || modifiers.meta) {
            return Update::None;
        }
        match key {
            "z" | "Z" if modifiers.shift => self.redo(),
            "z" | "Z" => self.undo(),
            "y" | "Y" => self.redo(),
            _ => Update::None,
        }
    }

    // --- Queries ---

    /// Committed strokes in draw order, for the host renderer.
    #[must_use]
    pub fn committed(&self) -> &[Stroke] {
        self.history.committed()
    }

    /// Samples of the in-progress stroke, for live preview.
    #[must_use]
    pub fn active_points(&self) -> &[Point] {
        match &self.gesture {
            Gesture::Drawing { points, .. } => points,
            Gesture::Idle => &[],
        }
    }

    /// Whether a stroke is currently being captured.
    #[must_use]
    pub fn stroke_in_progress(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }

    /// Number of strokes available to redo.
    #[must_use]
    pub fn redoable_count(&self) -> usize {
        self.history.redoable_len()
    }

    /// Flatten the committed scene to an encoded image.
    ///
    /// Returns `None` when nothing is committed, and on rasterization
    /// failure — the session has no fatal path.
    #[must_use]
    pub fn export_image(&self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let encoded = raster::render(
            self.history.committed(),
            self.width,
            self.height,
            self.dpr,
            self.background,
        )
        .and_then(|surface| surface.to_data_url());
        match encoded {
            Ok(url) => Some(url),
            Err(_) => None,
        }
    }

    fn image_update(&self) -> Update {
        Update::Image(self.export_image())
    }
}
