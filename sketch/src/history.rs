//! Two-stack linear undo/redo history for committed strokes.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::stroke::Stroke;

/// Undo/redo history with standard linear semantics.
///
/// Undo moves the most recent committed stroke onto the redo stack; redo
/// moves it back. Committing a new stroke clears the redo stack — there is
/// no branching.
#[derive(Debug, Clone, Default)]
pub struct History {
    committed: Vec<Stroke>,
    redoable: Vec<Stroke>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly committed stroke, discarding anything redoable.
    pub fn push(&mut self, stroke: Stroke) {
        self.committed.push(stroke);
        self.redoable.clear();
    }

    /// Move the most recent committed stroke to the redo stack.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.redoable.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone stroke back onto the committed stack.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redoable.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redoable.clear();
    }

    /// Committed strokes in draw order.
    #[must_use]
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` when nothing is committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Number of strokes available to redo.
    #[must_use]
    pub fn redoable_len(&self) -> usize {
        self.redoable.len()
    }
}
