//! View rendering methods for the multicheck component.

use super::model::Model;
use super::types::Control;
use crate::key::KeyMap as _;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the caption, the checkbox columns and, when enabled, the key
    /// help line.
    ///
    /// ```rust
    /// use bubbletea_multicheck::multicheck::{CheckOption, Model};
    ///
    /// let widget = Model::new(vec![
    ///     CheckOption::new("Option 1", "1"),
    ///     CheckOption::new("Option 2", "2"),
    /// ])
    /// .with_label("Numbers")
    /// .with_values(vec!["2"]);
    ///
    /// let view = widget.view();
    /// assert!(view.contains("Numbers"));
    /// assert!(view.contains("Option 2"));
    /// ```
    pub fn view(&self) -> String {
        let mut sections = Vec::new();
        if let Some(label) = &self.label {
            sections.push(self.styles.label.render(label));
        }
        sections.push(self.columns_view());
        if self.show_help {
            let help = self.help_view();
            if !help.is_empty() {
                sections.push(help);
            }
        }
        sections.join("\n")
    }

    fn columns_view(&self) -> String {
        let cursor = self.cursor();
        let columns: Vec<Vec<Control>> = self
            .columns_controls()
            .into_iter()
            .filter(|column| !column.is_empty())
            .collect();

        // Plain text per cell; styling is applied after measuring.
        let cells: Vec<Vec<(String, &Control)>> = columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|control| (self.control_text(control, control.id == cursor), control))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = cells
            .iter()
            .map(|column| column.iter().map(|(text, _)| text.width()).max().unwrap_or(0))
            .collect();
        let rows = cells.iter().map(Vec::len).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = String::new();
            for (i, column) in cells.iter().enumerate() {
                let last = i + 1 == cells.len();
                if i > 0 {
                    line.push_str(&self.styles.column_gap);
                }
                let used = match column.get(row) {
                    Some((text, control)) => {
                        line.push_str(&self.control_style(control, control.id == cursor).render(text));
                        text.width()
                    }
                    None => 0,
                };
                if !last {
                    line.push_str(&" ".repeat(widths[i].saturating_sub(used)));
                }
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn control_text(&self, control: &Control, under_cursor: bool) -> String {
        let marker = if !self.focus {
            String::new()
        } else if under_cursor {
            self.styles.cursor.clone()
        } else {
            " ".repeat(self.styles.cursor.width())
        };
        let prefix = if control.checked {
            &self.styles.checked_prefix
        } else {
            &self.styles.unchecked_prefix
        };
        format!("{marker}{prefix}{}", control.label)
    }

    fn control_style(&self, control: &Control, under_cursor: bool) -> &lipgloss_extras::prelude::Style {
        if self.focus && under_cursor {
            &self.styles.cursor_line
        } else if control.checked {
            &self.styles.checked
        } else {
            &self.styles.unchecked
        }
    }

    fn help_view(&self) -> String {
        let items: Vec<String> = self
            .key_map
            .short_help()
            .into_iter()
            .filter(|binding| binding.enabled())
            .map(|binding| format!("{} {}", binding.help().key, binding.help().desc))
            .collect();
        if items.is_empty() {
            return String::new();
        }
        self.styles.help.render(&items.join(self.styles.help_separator.as_str()))
    }
}
