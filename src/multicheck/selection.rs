//! Selection state for the multicheck component.
//!
//! [`Selection`] holds the values that are currently checked and implements
//! the three transitions the widget supports: reconciling with an external
//! selection, toggling one option and toggling "Select All". Each transition
//! returns the selected options in option-list order, which is exactly what
//! the owner gets notified with.
//!
//! Values that name no option of the current list are inert: they are never
//! returned and never counted.

use super::types::CheckOption;

/// The set of checked option values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    checked: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection with the options whose value appears in
    /// `external`, in option-list order. Unknown external values are dropped.
    ///
    /// ```rust
    /// use bubbletea_multicheck::multicheck::{CheckOption, Selection};
    ///
    /// let options = vec![CheckOption::new("A", "a"), CheckOption::new("B", "b")];
    /// let mut sel = Selection::new();
    /// let picked = sel.reconcile(&options, &["b".to_string(), "zzz".to_string()]);
    /// assert_eq!(picked, vec![CheckOption::new("B", "b")]);
    /// assert_eq!(sel.values(), ["b".to_string()]);
    /// ```
    pub fn reconcile(&mut self, options: &[CheckOption], external: &[String]) -> Vec<CheckOption> {
        self.checked = options
            .iter()
            .filter(|opt| external.contains(&opt.value))
            .map(|opt| opt.value.clone())
            .collect();
        log::debug!(
            "multicheck: reconciled {} external values to {} checked",
            external.len(),
            self.checked.len()
        );
        self.selected(options)
    }

    /// Checks or unchecks a single value. Checking a value that is already
    /// checked, or unchecking one that is not, leaves the selection as is.
    pub fn toggle_option(
        &mut self,
        options: &[CheckOption],
        value: &str,
        checked: bool,
    ) -> Vec<CheckOption> {
        if checked {
            if !self.is_checked(value) {
                self.checked.push(value.to_string());
            }
        } else {
            self.checked.retain(|v| v != value);
        }
        log::debug!("multicheck: option {value:?} set to {checked}");
        self.selected(options)
    }

    /// Selects every option when `checked` is true, clears the selection
    /// otherwise. This is a set or a clear, never a flip.
    pub fn toggle_select_all(&mut self, options: &[CheckOption], checked: bool) -> Vec<CheckOption> {
        if checked {
            self.checked = options.iter().map(|opt| opt.value.clone()).collect();
        } else {
            self.checked.clear();
        }
        log::debug!("multicheck: select all set to {checked}");
        self.selected(options)
    }

    /// True when every option is checked. Partial selection is unchecked;
    /// an empty option list counts as fully selected.
    pub fn is_select_all_checked(&self, options: &[CheckOption]) -> bool {
        self.live_count(options) == options.len()
    }

    /// Whether `value` is checked.
    pub fn is_checked(&self, value: &str) -> bool {
        self.checked.iter().any(|v| v == value)
    }

    /// The checked options, in option-list order.
    pub fn selected(&self, options: &[CheckOption]) -> Vec<CheckOption> {
        options
            .iter()
            .filter(|opt| self.is_checked(&opt.value))
            .cloned()
            .collect()
    }

    /// Raw checked values, including inert ones.
    pub fn values(&self) -> &[String] {
        &self.checked
    }

    fn live_count(&self, options: &[CheckOption]) -> usize {
        options.iter().filter(|opt| self.is_checked(&opt.value)).count()
    }
}
