//! Change notification for the multicheck component.
//!
//! The owner of a widget learns about selection changes through a
//! [`ChangeListener`]. The widget calls it exactly once per state
//! transition, before the call that caused the transition returns.
//!
//! Closures work out of the box:
//!
//! ```rust
//! use bubbletea_multicheck::multicheck::{CheckOption, Model};
//!
//! let mut widget = Model::new(vec![CheckOption::new("Option 1", "1")])
//!     .with_on_change(|selected: &[CheckOption]| {
//!         println!("{} selected", selected.len());
//!     });
//! ```
//!
//! So does the sending half of a channel, which suits an application that
//! drains notifications in its own update loop:
//!
//! ```rust
//! use bubbletea_multicheck::multicheck::{CheckOption, ControlId, Model};
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut widget = Model::new(vec![CheckOption::new("Option 1", "1")]).with_on_change(tx);
//! widget.click(ControlId::Option(0));
//! assert_eq!(rx.try_recv().unwrap(), vec![CheckOption::new("Option 1", "1")]);
//! ```

use super::types::CheckOption;
use std::sync::mpsc::Sender;

/// Receives the selected options after every selection change.
pub trait ChangeListener: Send {
    /// Called with the selected options, in option-list order.
    fn on_change(&mut self, selected: &[CheckOption]);
}

impl<F> ChangeListener for F
where
    F: FnMut(&[CheckOption]) + Send,
{
    fn on_change(&mut self, selected: &[CheckOption]) {
        self(selected)
    }
}

impl ChangeListener for Sender<Vec<CheckOption>> {
    fn on_change(&mut self, selected: &[CheckOption]) {
        if self.send(selected.to_vec()).is_err() {
            log::warn!("multicheck: change receiver dropped, notification discarded");
        }
    }
}
