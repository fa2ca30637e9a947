//! Core types for the multicheck component.

use serde::{Deserialize, Serialize};

/// One selectable item: the text shown next to the checkbox and the value
/// reported to the owner.
///
/// Values are expected to be unique within one option list. Labels may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckOption {
    /// Text rendered next to the checkbox.
    pub label: String,
    /// Identifier stored in the selection.
    pub value: String,
}

impl CheckOption {
    /// Creates an option from a label and a value.
    ///
    /// ```rust
    /// use bubbletea_multicheck::multicheck::CheckOption;
    ///
    /// let opt = CheckOption::new("Option 1", "1");
    /// assert_eq!(opt.label, "Option 1");
    /// assert_eq!(opt.value, "1");
    /// ```
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Where the selection comes from, derived from the current props on every
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// An external selection is supplied and drives the checked state.
    Controlled(&'a [String]),
    /// The widget owns its selection, starting empty.
    Uncontrolled,
}

impl<'a> Mode<'a> {
    /// Computes the mode from the optional external selection.
    pub fn from_values(values: Option<&'a [String]>) -> Self {
        match values {
            Some(values) => Mode::Controlled(values),
            None => Mode::Uncontrolled,
        }
    }

    /// Whether an external selection is present.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Mode::Controlled(_))
    }
}

/// Identifies a rendered checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The synthetic "Select All" checkbox, always first.
    SelectAll,
    /// The option at this index of the option list.
    Option(usize),
}

/// One checkbox of the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Which checkbox this is; pass it to `Model::click` to interact.
    pub id: ControlId,
    /// Text shown next to the box.
    pub label: String,
    /// Whether the box is checked.
    pub checked: bool,
}
