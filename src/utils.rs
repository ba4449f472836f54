//! Miscellaneous utility functions for ferry.
//!
//! - [cli]: command-line parsing
//! - [helpers]: path normalization, color parsing, home shortening
//! - [logging]: file based tracing setup

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{
    DEFAULT_RESULT_DELAY_MS, clamp_result_delay, normalize_path, parse_color, shorten_home_path,
};
