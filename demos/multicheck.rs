//! Interactive demo: a controller that owns the option list, the column
//! count and the external selection, and shows what the widget reports.
//!
//! Run with `cargo run --example multicheck`. Set `MULTICHECK_CONFIG` to a
//! TOML file to load your own options and `RUST_LOG=debug` to watch the
//! selection transitions.
//!
//! Keys: `↑/↓` move, `space` toggles, `ctrl+a` toggles all, `+`/`-` change
//! the column count, `r` re-applies the configured selection, `q` quits.

use bubbletea_multicheck::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::KeyCode;
use std::sync::mpsc::{self, Receiver};

const DEFAULT_CONFIG: &str = r#"
label = "MultiCheck"
columns = 2
values = ["1", "3"]

[[options]]
label = "Option 1"
value = "1"

[[options]]
label = "Option 2"
value = "2"

[[options]]
label = "Option 3"
value = "3"

[[options]]
label = "Option 4"
value = "4"

[[options]]
label = "Option 5"
value = "5"
"#;

fn load_config() -> MultiCheckConfig {
    let loaded = match std::env::var("MULTICHECK_CONFIG") {
        Ok(path) => MultiCheckConfig::load(&path),
        Err(_) => MultiCheckConfig::from_toml_str(DEFAULT_CONFIG),
    };
    loaded.unwrap_or_else(|err| {
        log::warn!("falling back to an empty widget: {err}");
        MultiCheckConfig::default()
    })
}

struct App {
    widget: MultiCheck,
    changes: Receiver<Vec<CheckOption>>,
    initial_values: Option<Vec<String>>,
    last_reported: Vec<CheckOption>,
    notifications: usize,
}

impl App {
    fn drain_changes(&mut self) {
        for selected in self.changes.try_iter() {
            self.last_reported = selected;
            self.notifications += 1;
        }
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = load_config();
        let initial_values = config.values.clone();
        let (tx, rx) = mpsc::channel();

        let mut widget = MultiCheck::new(config.options)
            .with_columns(config.columns)
            .with_show_help(true)
            .with_on_change(tx);
        widget.set_label(config.label);
        widget.set_values(initial_values.clone());
        let cmd = widget.focus();

        let mut app = Self {
            widget,
            changes: rx,
            initial_values,
            last_reported: Vec::new(),
            notifications: 0,
        };
        app.drain_changes();
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match key_msg.key {
                KeyCode::Char('q') | KeyCode::Esc => return Some(quit()),
                KeyCode::Char('+') => {
                    self.widget.set_columns(self.widget.columns() + 1);
                    return None;
                }
                KeyCode::Char('-') => {
                    self.widget
                        .set_columns(self.widget.columns().saturating_sub(1));
                    return None;
                }
                KeyCode::Char('r') => {
                    self.widget.set_values(self.initial_values.clone());
                    self.drain_changes();
                    return None;
                }
                _ => {}
            }
        }

        let cmd = self.widget.update(msg);
        self.drain_changes();
        cmd
    }

    fn view(&self) -> String {
        let reported: Vec<&str> = self
            .last_reported
            .iter()
            .map(|opt| opt.label.as_str())
            .collect();
        format!(
            "{}\n\ncolumns: {}  notifications: {}\nselected: [{}]\n\n+/- columns • r reset • q quit",
            self.widget.view(),
            self.widget.columns(),
            self.notifications,
            reported.join(", ")
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
