//! Key bindings shared by the widgets in this crate.
//!
//! A [`Binding`] groups one or more key presses with the help text shown for
//! them. Components keep their bindings in a key map struct and implement
//! [`KeyMap`] so the bindings can be listed in a help line.
//!
//! ```rust
//! use bubbletea_multicheck::key::{Binding, KeyMap};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
//!     .with_help("space", "toggle");
//! let all = Binding::new(vec![(KeyCode::Char('a'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+a", "select all");
//!
//! struct Keys {
//!     toggle: Binding,
//!     all: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.toggle, &self.all]
//!     }
//! }
//!
//! let keys = Keys { toggle, all };
//! assert_eq!(keys.short_help().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
///
/// Shift is not part of the comparison for character keys since the
/// terminal already reports the shifted character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let pressed = match msg.key {
            KeyCode::Char(_) => msg.modifiers.difference(KeyModifiers::SHIFT),
            _ => msg.modifiers,
        };
        pressed == self.mods
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"ctrl+a"`.
    pub key: String,
    /// Description, e.g. `"select all"`.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(KeyCode, KeyModifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help output.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active. A binding without keys is never enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Bindings a component exposes for help output.
pub trait KeyMap {
    /// The few bindings shown in a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Char('k'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_matches_with_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('a'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('a'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_ignored_for_characters() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
        assert!(b.enabled());
        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));

        let empty = Binding::new(Vec::<KeyCode>::new());
        assert!(!empty.enabled());
    }

    #[test]
    fn test_help_text() {
        let b = Binding::new(vec![KeyCode::Char('?')]).with_help("?", "help");
        assert_eq!(b.help().key, "?");
        assert_eq!(b.help().desc, "help");
    }
}
