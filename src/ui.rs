//! Terminal UI for ferry.
//!
//! - [render]: the per-frame entry point ([render::render])
//! - [panes]: directory and action lists
//! - [widgets]: popup, result box, footer

pub mod panes;
pub mod render;
pub mod widgets;

pub use render::render;
