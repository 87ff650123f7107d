//! Page-scoped view state, one module per dashboard page.
//!
//! These are plain structs and pure functions — the rendering layer that
//! consumes them is out of scope, so every behavior here is directly
//! testable.

pub mod cases;
pub mod dashboard;
pub mod notes;
pub mod recorder;
pub mod schedule;
pub mod tasks;
