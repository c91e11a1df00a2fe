//! Rendering adapter: the scene interface the puzzle kernel talks to.
//!
//! # Invariants
//! - Renderers never mutate game state; they follow the event log.
//! - Screen positions come from the same orthographic projection the
//!   movement resolver uses, so what is drawn aligned is what resolves.
//!
//! [`DebugTextRenderer`] rasterises the current view into an ASCII frame.
//! It stands in for a GPU backend behind the same trait.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer, sync_scene};
