//! Input configuration options for ferry
//!
//! This module defines the `[keys]` bindings read from the ferry.toml configuration file.
//! Each list holds key strings understood by the keymap parser ("k", "Up", "Ctrl+c", "<c-c>").

use serde::Deserialize;

/// Key bindings for every abstract input
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Keys {
    up: Vec<String>,
    down: Vec<String>,
    open: Vec<String>,
    back: Vec<String>,
    toggle: Vec<String>,
    advance: Vec<String>,
    confirm: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(up, down, open, back, toggle, advance, confirm, quit);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            up: vec!["k".into(), "Up".into()],
            down: vec!["j".into(), "Down".into()],
            open: vec!["l".into(), "Right".into(), "Enter".into()],
            back: vec!["h".into(), "Left".into(), "Backspace".into()],
            toggle: vec!["Space".into()],
            advance: vec!["Tab".into()],
            confirm: vec!["Enter".into(), "y".into()],
            quit: vec!["q".into(), "Esc".into(), "Ctrl+c".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_one_list() {
        let keys: Keys = toml::from_str("advance = [\"n\"]").expect("parse");
        assert_eq!(keys.advance(), ["n".to_string()]);
        assert_eq!(keys.toggle(), ["Space".to_string()]);
    }
}
