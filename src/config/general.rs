//! The general configuration settings for ferry.
//!
//! [General] is deserialized from the `[general]` table of ferry.toml and turned into
//! [InternalGeneral], which holds the clamped values the session uses.

use crate::utils::{DEFAULT_RESULT_DELAY_MS, clamp_result_delay};

use serde::Deserialize;

use std::time::Duration;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    result_delay_ms: u64,
    move_to_trash: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            result_delay_ms: DEFAULT_RESULT_DELAY_MS,
            move_to_trash: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InternalGeneral {
    result_delay: Duration,
    move_to_trash: bool,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            result_delay: clamp_result_delay(g.result_delay_ms),
            move_to_trash: g.move_to_trash,
        }
    }
}

impl InternalGeneral {
    /// How long the result screen stays up before the session ends.
    #[inline]
    pub fn result_delay(&self) -> Duration {
        self.result_delay
    }

    /// Send removed entries to the platform trash instead of `rm -rf`.
    #[inline]
    pub fn move_to_trash(&self) -> bool {
        self.move_to_trash
    }
}
