//! Core model implementation for the multicheck component.

use super::keymap::{default_key_map, KeyMap};
use super::layout::layout;
use super::notify::ChangeListener;
use super::selection::Selection;
use super::style::Styles;
use super::types::{CheckOption, Control, ControlId, Mode};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::fmt;

/// A group of checkboxes with a leading "Select All" control, laid out in
/// balanced columns.
///
/// The widget is configured through props: the option list, the column
/// count, an optional caption and an optional external selection. When the
/// external selection is present the widget is *controlled*: every time the
/// selection or the option list is replaced, the checked state is rebuilt
/// from it and the owner is notified. Without it the widget is
/// *uncontrolled* and starts with nothing checked.
///
/// # Examples
///
/// ```rust
/// use bubbletea_multicheck::multicheck::{CheckOption, ControlId, Model};
/// use std::sync::mpsc;
///
/// let options = vec![
///     CheckOption::new("Option 1", "1"),
///     CheckOption::new("Option 2", "2"),
/// ];
/// let (tx, rx) = mpsc::channel();
/// let mut widget = Model::new(options)
///     .with_label("Pick some")
///     .with_columns(2)
///     .with_on_change(tx);
///
/// widget.click(ControlId::SelectAll);
/// assert!(widget.is_select_all_checked());
/// assert_eq!(rx.try_recv().unwrap().len(), 2);
/// ```
pub struct Model {
    /// Caption rendered above the checkboxes.
    pub label: Option<String>,
    /// Key bindings used while focused.
    pub key_map: KeyMap,
    /// Visual configuration.
    pub styles: Styles,
    /// Whether to render a one-line key help under the checkboxes.
    pub show_help: bool,

    pub(super) options: Vec<CheckOption>,
    pub(super) columns: usize,
    pub(super) values: Option<Vec<String>>,
    pub(super) selection: Selection,
    pub(super) on_change: Option<Box<dyn ChangeListener>>,
    /// A controlled reconcile ran with no listener attached.
    pub(super) unannounced: bool,
    /// Position in reading order: 0 is Select All, `i + 1` is option `i`.
    pub(super) cursor: usize,
    pub(super) focus: bool,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("label", &self.label)
            .field("options", &self.options)
            .field("columns", &self.columns)
            .field("values", &self.values)
            .field("selection", &self.selection)
            .field("on_change", &self.on_change.is_some())
            .field("unannounced", &self.unannounced)
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .finish()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Model {
    /// Creates an uncontrolled widget with one column and nothing checked.
    pub fn new(options: Vec<CheckOption>) -> Self {
        Self {
            label: None,
            key_map: default_key_map(),
            styles: Styles::default(),
            show_help: false,
            options,
            columns: 1,
            values: None,
            selection: Selection::new(),
            on_change: None,
            unannounced: false,
            cursor: 0,
            focus: false,
        }
    }

    /// Sets the caption (builder pattern).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the requested column count (builder pattern). 0 means 1.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Supplies an external selection (builder pattern), switching the
    /// widget to controlled mode and reconciling right away.
    ///
    /// If no listener is attached yet, the reconciled selection is delivered
    /// to the first one installed afterwards.
    pub fn with_values<S: Into<String>>(mut self, values: Vec<S>) -> Self {
        self.set_values(Some(values.into_iter().map(Into::into).collect()));
        self
    }

    /// Sets the change listener (builder pattern).
    pub fn with_on_change<L: ChangeListener + 'static>(mut self, listener: L) -> Self {
        self.set_on_change(listener);
        self
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings (builder pattern).
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Shows or hides the key help line (builder pattern).
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Replaces the option list. In controlled mode the selection is
    /// reconciled against the new list and the owner is notified.
    pub fn set_options(&mut self, options: Vec<CheckOption>) {
        self.options = options;
        self.cursor = self.cursor.min(self.options.len());
        self.sync();
    }

    /// Replaces the external selection. `Some` (even an empty list) makes
    /// the widget controlled and reconciles; `None` makes it uncontrolled
    /// and keeps the current checked state.
    pub fn set_values(&mut self, values: Option<Vec<String>>) {
        self.values = values;
        self.sync();
    }

    /// Sets the requested column count. 0 means 1.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns;
    }

    /// Sets or clears the caption.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Installs the change listener, replacing any previous one.
    ///
    /// When a controlled reconcile happened while no listener was attached,
    /// the new listener immediately receives the current selection.
    pub fn set_on_change<L: ChangeListener + 'static>(&mut self, listener: L) {
        self.on_change = Some(Box::new(listener));
        if self.unannounced {
            log::debug!("multicheck: delivering reconcile made before the listener was set");
            let selected = self.selected();
            self.notify(&selected);
        }
    }

    /// Removes the change listener. The widget keeps working; changes are
    /// simply not reported.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// The option list.
    pub fn options(&self) -> &[CheckOption] {
        &self.options
    }

    /// The requested column count, as given.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The external selection, if any.
    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    /// Controlled or uncontrolled, computed from the current props.
    pub fn mode(&self) -> Mode<'_> {
        Mode::from_values(self.values.as_deref())
    }

    /// The selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The checked options, in option-list order.
    pub fn selected(&self) -> Vec<CheckOption> {
        self.selection.selected(&self.options)
    }

    /// Whether the option with `value` is checked.
    pub fn is_checked(&self, value: &str) -> bool {
        self.selection.is_checked(value)
    }

    /// Whether "Select All" renders checked: every option is checked.
    pub fn is_select_all_checked(&self) -> bool {
        self.selection.is_select_all_checked(&self.options)
    }

    /// Checks or unchecks one option and notifies the owner.
    pub fn toggle_option(&mut self, value: &str, checked: bool) {
        let selected = self.selection.toggle_option(&self.options, value, checked);
        self.notify(&selected);
    }

    /// Selects every option or clears the selection, then notifies the owner.
    pub fn toggle_select_all(&mut self, checked: bool) {
        let selected = self.selection.toggle_select_all(&self.options, checked);
        self.notify(&selected);
    }

    /// Flips the given control, the way a mouse click on it would.
    ///
    /// Clicking an option index outside the list does nothing.
    pub fn click(&mut self, id: ControlId) {
        match id {
            ControlId::SelectAll => {
                let checked = !self.is_select_all_checked();
                self.toggle_select_all(checked);
            }
            ControlId::Option(index) => {
                let Some(value) = self.options.get(index).map(|opt| opt.value.clone()) else {
                    log::debug!("multicheck: click on missing option {index} ignored");
                    return;
                };
                let checked = !self.selection.is_checked(&value);
                self.toggle_option(&value, checked);
            }
        }
    }

    /// All controls in reading order, Select All first.
    pub fn controls(&self) -> Vec<Control> {
        self.columns_controls().into_iter().flatten().collect()
    }

    /// Controls grouped by column. Always returns `max(columns, 1)` groups;
    /// groups past the last control are empty.
    pub fn columns_controls(&self) -> Vec<Vec<Control>> {
        let mut next = 0;
        layout(&self.options, self.columns)
            .into_iter()
            .enumerate()
            .map(|(i, column)| {
                let mut controls = Vec::with_capacity(column.len() + 1);
                if i == 0 {
                    controls.push(Control {
                        id: ControlId::SelectAll,
                        label: "Select All".to_string(),
                        checked: self.is_select_all_checked(),
                    });
                }
                for opt in column {
                    controls.push(Control {
                        id: ControlId::Option(next),
                        label: opt.label.clone(),
                        checked: self.selection.is_checked(&opt.value),
                    });
                    next += 1;
                }
                controls
            })
            .collect()
    }

    /// The control under the cursor.
    pub fn cursor(&self) -> ControlId {
        match self.cursor {
            0 => ControlId::SelectAll,
            n => ControlId::Option(n - 1),
        }
    }

    /// Moves the cursor to `id`. Out-of-range option indices are clamped.
    pub fn set_cursor(&mut self, id: ControlId) {
        self.cursor = match id {
            ControlId::SelectAll => 0,
            ControlId::Option(index) => (index + 1).min(self.options.len()),
        };
    }

    /// Handles key presses while focused.
    ///
    /// ```rust
    /// use bubbletea_multicheck::multicheck::{CheckOption, Model};
    /// use bubbletea_multicheck::Component;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut widget = Model::new(vec![CheckOption::new("Option 1", "1")]);
    /// widget.focus();
    /// widget.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }));
    /// widget.update(Box::new(KeyMsg { key: KeyCode::Char(' '), modifiers: KeyModifiers::NONE }));
    /// assert!(widget.is_checked("1"));
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        if self.key_map.up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.key_map.down.matches(key_msg) {
            self.cursor = (self.cursor + 1).min(self.options.len());
        } else if self.key_map.toggle.matches(key_msg) {
            self.click(self.cursor());
        } else if self.key_map.select_all.matches(key_msg) {
            self.click(ControlId::SelectAll);
        }
    }

    /// Reconciles with the external selection when controlled.
    fn sync(&mut self) {
        let Mode::Controlled(values) = Mode::from_values(self.values.as_deref()) else {
            log::debug!("multicheck: uncontrolled, skipping reconcile");
            self.unannounced = false;
            return;
        };
        let selected = self.selection.reconcile(&self.options, values);
        if self.on_change.is_none() {
            self.unannounced = true;
        }
        self.notify(&selected);
    }

    fn notify(&mut self, selected: &[CheckOption]) {
        match self.on_change.as_mut() {
            Some(listener) => {
                listener.on_change(selected);
                self.unannounced = false;
            }
            None => log::trace!("multicheck: no listener, change not reported"),
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
