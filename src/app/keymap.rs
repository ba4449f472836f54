//! Key mapping for ferry
//!
//! Turns configured key strings into crossterm [KeyEvent] matches and resolves a pressed key to
//! the abstract [Input] the workflow understands. Confirm bindings only apply on the removal
//! prompt, so Enter can both open directories and confirm a removal.

use crate::app::state::{Input, Screen};
use crate::config::{Config, Keys};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use phf::phf_map;
use std::collections::HashMap;

/// Key + modifiers as used in the keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Named keys accepted in the config, lowercase.
static NAMED_KEYS: phf::Map<&'static str, KeyCode> = phf_map! {
    "up" => KeyCode::Up,
    "down" => KeyCode::Down,
    "left" => KeyCode::Left,
    "right" => KeyCode::Right,
    "enter" => KeyCode::Enter,
    "return" => KeyCode::Enter,
    "esc" => KeyCode::Esc,
    "escape" => KeyCode::Esc,
    "backspace" => KeyCode::Backspace,
    "back" => KeyCode::Backspace,
    "tab" => KeyCode::Tab,
    "space" => KeyCode::Char(' '),
    "spc" => KeyCode::Char(' '),
    "home" => KeyCode::Home,
    "end" => KeyCode::End,
    "pageup" => KeyCode::PageUp,
    "pagedown" => KeyCode::PageDown,
    "delete" => KeyCode::Delete,
    "del" => KeyCode::Delete,
};

/// Maps keys to inputs, built from the `[keys]` config
#[derive(Debug, Clone)]
pub struct Keymap {
    map: HashMap<Key, Input>,
    confirm: HashMap<Key, Input>,
}

impl Keymap {
    pub fn from_config(config: &Config) -> Self {
        Self::from_keys(config.keys())
    }

    #[rustfmt::skip]
    pub fn from_keys(keys: &Keys) -> Self {
        let mut map = HashMap::new();
        let mut confirm = HashMap::new();

        bind(keys.up(),         Input::Up,      &mut map);
        bind(keys.down(),       Input::Down,    &mut map);
        bind(keys.open(),       Input::Open,    &mut map);
        bind(keys.back(),       Input::Back,    &mut map);
        bind(keys.toggle(),     Input::Toggle,  &mut map);
        bind(keys.advance(),    Input::Advance, &mut map);
        bind(keys.quit(),       Input::Quit,    &mut map);

        bind(keys.confirm(),    Input::Confirm, &mut confirm);

        Keymap { map, confirm }
    }

    /// Looks up the input for a key event on the given screen.
    ///
    /// On the result screen every key counts, unbound ones end the session like Quit.
    pub fn lookup(&self, key: KeyEvent, screen: Screen) -> Option<Input> {
        if screen == Screen::ConfirmRemoval
            && let Some(input) = Self::find(&self.confirm, key)
        {
            return Some(input);
        }

        let found = Self::find(&self.map, key);
        if screen.is_terminal() {
            return found.or(Some(Input::Quit));
        }
        found
    }

    fn find(map: &HashMap<Key, Input>, key: KeyEvent) -> Option<Input> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(input) = map.get(&k).copied() {
            return Some(input);
        }

        // Uppercase letters arrive with SHIFT set
        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return map.get(&k2).copied();
        }
        None
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_keys(&Keys::default())
    }
}

/// Parses a key string such as `"k"`, `"Enter"`, `"Ctrl+c"`, `"<c-c>"` or `"F5"`.
pub fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    if s == " " {
        return Some(Key {
            code: KeyCode::Char(' '),
            modifiers,
        });
    }

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    for part in input.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "" => continue,
            named if NAMED_KEYS.contains_key(named) => code = NAMED_KEYS.get(named).copied(),
            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if let Some(n) = p_low.strip_prefix('f')
                    && !n.is_empty()
                    && n.chars().all(|c| c.is_ascii_digit())
                {
                    code = Some(KeyCode::F(n.parse().ok()?));
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], input: Input, map: &mut HashMap<Key, Input>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, input);
            }
            None => tracing::warn!(key = %k, ?input, "ignoring unparsable key binding"),
        }
    }
}
