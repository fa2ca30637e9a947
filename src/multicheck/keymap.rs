//! Key bindings for the multicheck component.

use crate::key::{self, Binding};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for moving between checkboxes and toggling them.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor to the previous checkbox.
    pub up: Binding,
    /// Move the cursor to the next checkbox.
    pub down: Binding,
    /// Toggle the checkbox under the cursor.
    pub toggle: Binding,
    /// Toggle "Select All" wherever the cursor is.
    pub select_all: Binding,
}

/// Default bindings: `↑/k`, `↓/j`, `space/x` and `ctrl+a`.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
        down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]).with_help("↓/j", "down"),
        toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
            .with_help("space", "toggle"),
        select_all: Binding::new(vec![(KeyCode::Char('a'), KeyModifiers::CONTROL)])
            .with_help("ctrl+a", "select all"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.up, &self.down, &self.toggle, &self.select_all]
    }
}
