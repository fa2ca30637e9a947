//! Styles for the multicheck component.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Visual configuration of a multicheck widget.
///
/// Text decorations (`checked_prefix`, `cursor`, ...) are plain strings so
/// the layout can measure them; colors live in the `Style` fields.
///
/// ```rust
/// use bubbletea_multicheck::multicheck::Styles;
///
/// let styles = Styles {
///     checked_prefix: "[✓] ".to_string(),
///     column_gap: "    ".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(styles.unchecked_prefix, "[ ] ");
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the caption line.
    pub label: Style,
    /// Style of a checked control.
    pub checked: Style,
    /// Style of an unchecked control.
    pub unchecked: Style,
    /// Style of the control under the cursor while focused.
    pub cursor_line: Style,
    /// Style of the help line.
    pub help: Style,
    /// Box drawn before a checked label.
    pub checked_prefix: String,
    /// Box drawn before an unchecked label.
    pub unchecked_prefix: String,
    /// Marker in front of the control under the cursor.
    pub cursor: String,
    /// Blank space between columns.
    pub column_gap: String,
    /// Separator between help items.
    pub help_separator: String,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let subtle = AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        };

        Self {
            label: Style::new().bold(true),
            checked: Style::new().foreground(AdaptiveColor {
                Light: "#02A877",
                Dark: "#02BF87",
            }),
            unchecked: Style::new(),
            cursor_line: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            help: Style::new().foreground(subtle),
            checked_prefix: "[x] ".to_string(),
            unchecked_prefix: "[ ] ".to_string(),
            cursor: "> ".to_string(),
            column_gap: "  ".to_string(),
            help_separator: " • ".to_string(),
        }
    }
}
