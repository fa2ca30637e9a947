#![warn(missing_docs)]

//! # bubbletea-multicheck
//!
//! A multi-select checkbox group for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The [`multicheck`] component renders a "Select All" checkbox followed by
//! one checkbox per option, spread over a requested number of columns read
//! top to bottom, and reports the selected options to its owner. It follows
//! the Elm Architecture pattern with `update()` and `view()` methods like the
//! other bubbletea components.
//!
//! - **Controlled or uncontrolled**: drive the selection from outside or let
//!   the widget own it
//! - **Balanced columns**: column sizes never differ by more than one slot
//! - **Change notifications** through closures or channels
//! - **Configurable** through builder methods or a TOML description
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_multicheck::prelude::*;
//!
//! let options = vec![
//!     CheckOption::new("Option 1", "1"),
//!     CheckOption::new("Option 2", "2"),
//!     CheckOption::new("Option 3", "3"),
//! ];
//! let mut widget = MultiCheck::new(options)
//!     .with_label("MultiCheck")
//!     .with_columns(2)
//!     .with_on_change(|selected: &[CheckOption]| {
//!         println!("selected: {:?}", selected);
//!     });
//!
//! widget.click(ControlId::Option(1));
//! assert!(widget.is_checked("2"));
//! println!("{}", widget.view());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_multicheck::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     fruits: MultiCheck,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut fruits = MultiCheck::new(vec![
//!             CheckOption::new("Apple", "apple"),
//!             CheckOption::new("Pear", "pear"),
//!         ]);
//!         let cmd = fruits.focus();
//!         (Self { fruits }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.fruits.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.fruits.view()
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod multicheck;

use bubbletea_rs::Cmd;

/// Focus management for components.
///
/// A focused component reacts to key presses and renders its cursor; a
/// blurred one ignores input.
///
/// ```rust
/// use bubbletea_multicheck::prelude::*;
///
/// let mut widget = MultiCheck::new(vec![CheckOption::new("A", "a")]);
/// assert!(!widget.focused());
///
/// widget.focus();
/// assert!(widget.focused());
///
/// widget.blur();
/// assert!(!widget.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command to run,
    /// such as a redraw.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use config::MultiCheckConfig;
pub use error::{Error, Result};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use multicheck::Model as MultiCheck;
pub use multicheck::{
    layout, CheckOption, ChangeListener, Control, ControlId, KeyMap as MultiCheckKeyMap, Mode,
    Selection, Styles as MultiCheckStyles,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_multicheck::prelude::*;
///
/// let widget = MultiCheck::new(vec![CheckOption::new("A", "a")]);
/// assert_eq!(widget.controls().len(), 2);
/// ```
pub mod prelude {
    pub use crate::config::MultiCheckConfig;
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::multicheck::Model as MultiCheck;
    pub use crate::multicheck::{
        layout, CheckOption, ChangeListener, Control, ControlId, KeyMap as MultiCheckKeyMap,
        Mode, Selection, Styles as MultiCheckStyles,
    };
    pub use crate::Component;
}
