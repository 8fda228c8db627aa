//! Layout engine: maps grid cells to card rectangles for a viewport.
//!
//! Layout is recomputed every frame, so a resize reflows every card at
//! once and no card keeps a stale rectangle.

pub mod grid;

pub use grid::{GridGeometry, Rect, Viewport};
