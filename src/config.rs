//! Configuration for ferry.
//!
//! - [load]: locating, reading and generating ferry.toml ([Config], [RawConfig])
//! - [general]: result delay and trash behavior
//! - [display]: entry decorations
//! - [theme]: colors
//! - [input]: key bindings

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::Display;
pub use general::{General, InternalGeneral};
pub use input::Keys;
pub use load::{Config, LogConfig, RawConfig};
pub use theme::Theme;
