//! Freehand sketch engine for the caseboard note composer.
//!
//! This crate owns the full lifecycle of a drawing surface attached to a
//! note: capturing pointer samples into pressure-tagged strokes, maintaining
//! the two-stack undo/redo history, converting each committed stroke into a
//! smoothed filled outline, and flattening the scene to a PNG data URL for
//! persistence. The host UI is responsible only for forwarding pointer and
//! keyboard events to the [`session::Session`] and persisting the image
//! payloads it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Gesture state machine, history, and the public contract |
//! | [`stroke`] | Committed stroke data |
//! | [`history`] | Two-stack linear undo/redo |
//! | [`tool`] | Pen/eraser tools and per-tool settings |
//! | [`outline`] | Stroke-to-outline conversion with pressure-varying width |
//! | [`raster`] | Scanline rasterization and PNG/data-URL encoding |
//! | [`geom`] | Point and color primitives |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod geom;
pub mod history;
pub mod outline;
pub mod raster;
pub mod session;
pub mod stroke;
pub mod tool;
