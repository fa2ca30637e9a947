//! Multi-select checkbox group with a "Select All" control.
//!
//! Given a list of labeled options, the component renders a "Select All"
//! checkbox followed by one checkbox per option, spread over a requested
//! number of columns read top to bottom, and reports the selected options to
//! its owner.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_multicheck::multicheck::{CheckOption, ControlId, Model};
//!
//! let options = vec![
//!     CheckOption::new("Option 1", "1"),
//!     CheckOption::new("Option 2", "2"),
//!     CheckOption::new("Option 3", "3"),
//!     CheckOption::new("Option 4", "4"),
//! ];
//! let mut widget = Model::new(options).with_label("MultiCheck").with_columns(2);
//!
//! widget.click(ControlId::Option(0));
//! assert_eq!(widget.selected(), vec![CheckOption::new("Option 1", "1")]);
//! assert!(!widget.is_select_all_checked());
//! ```
//!
//! # Controlled and Uncontrolled
//!
//! Without external values the widget keeps its own selection, starting
//! empty. With external values (`with_values` / `set_values(Some(..))`) the
//! checked state is rebuilt from them, in option order and ignoring unknown
//! values, whenever they or the option list are replaced. Every rebuild is
//! reported to the owner, even when nothing changed.
//!
//! ```rust
//! use bubbletea_multicheck::multicheck::{CheckOption, Model};
//!
//! let options = vec![CheckOption::new("A", "a"), CheckOption::new("B", "b")];
//! let mut widget = Model::new(options).with_values(vec!["b", "unknown"]);
//! assert!(widget.is_checked("b"));
//!
//! widget.set_values(Some(vec!["a".to_string()]));
//! assert!(widget.is_checked("a"));
//! assert!(!widget.is_checked("b"));
//! ```
//!
//! # Columns
//!
//! See [`layout`] for how options are distributed. "Select All" always
//! takes the first slot of the first column.

pub mod keymap;
pub mod layout;
pub mod model;
pub mod notify;
pub mod selection;
pub mod style;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use layout::{column_slots, layout};
pub use model::Model;
pub use notify::ChangeListener;
pub use selection::Selection;
pub use style::Styles;
pub use types::{CheckOption, Control, ControlId, Mode};
