//! Declarative widget configuration.
//!
//! A [`MultiCheckConfig`] describes the props of a multicheck widget (caption,
//! column count, options and an optional external selection) so they can be
//! kept in a TOML file instead of code.
//!
//! ```rust
//! use bubbletea_multicheck::config::MultiCheckConfig;
//!
//! let config = MultiCheckConfig::from_toml_str(r#"
//!     label = "Fruits"
//!     columns = 2
//!     values = ["pear"]
//!
//!     [[options]]
//!     label = "Apple"
//!     value = "apple"
//!
//!     [[options]]
//!     label = "Pear"
//!     value = "pear"
//! "#).unwrap();
//!
//! let widget = config.into_model();
//! assert!(widget.is_checked("pear"));
//! assert_eq!(widget.columns(), 2);
//! ```

use crate::error::{Error, Result};
use crate::multicheck::{CheckOption, Model};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_columns() -> usize {
    1
}

/// Props of a multicheck widget.
///
/// Leaving `values` out keeps the widget uncontrolled; `values = []` makes
/// it controlled with nothing selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiCheckConfig {
    /// Caption above the checkboxes.
    #[serde(default)]
    pub label: Option<String>,
    /// Requested column count. 0 means 1.
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// External selection.
    #[serde(default)]
    pub values: Option<Vec<String>>,
    /// The options, in display order.
    #[serde(default)]
    pub options: Vec<CheckOption>,
}

impl Default for MultiCheckConfig {
    fn default() -> Self {
        Self {
            label: None,
            columns: default_columns(),
            values: None,
            options: Vec::new(),
        }
    }
}

impl MultiCheckConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        log::debug!(
            "multicheck: loaded config with {} options, {} columns, controlled={}",
            config.options.len(),
            config.columns,
            config.values.is_some()
        );
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Builds an uncontrolled or controlled widget from these props.
    pub fn into_model(self) -> Model {
        let mut model = Model::new(self.options).with_columns(self.columns);
        model.set_label(self.label);
        if self.values.is_some() {
            model.set_values(self.values);
        }
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MultiCheckConfig::from_toml_str("").unwrap();
        assert_eq!(config, MultiCheckConfig::default());
        assert_eq!(config.columns, 1);

        let model = config.into_model();
        assert!(model.options().is_empty());
        assert!(!model.mode().is_controlled());
    }

    #[test]
    fn test_uncontrolled_when_values_missing() {
        let config = MultiCheckConfig::from_toml_str(
            r#"
            [[options]]
            label = "Option 1"
            value = "1"
            "#,
        )
        .unwrap();
        assert!(config.values.is_none());
        let model = config.into_model();
        assert!(!model.mode().is_controlled());
        assert!(model.selected().is_empty());
    }

    #[test]
    fn test_empty_values_are_controlled() {
        let config = MultiCheckConfig::from_toml_str("values = []").unwrap();
        assert_eq!(config.values, Some(Vec::new()));
        assert!(config.into_model().mode().is_controlled());
    }

    #[test]
    fn test_label_and_columns() {
        let config = MultiCheckConfig::from_toml_str("label = \"Pick\"\ncolumns = 0").unwrap();
        let model = config.into_model();
        assert_eq!(model.label.as_deref(), Some("Pick"));
        assert_eq!(model.columns(), 0);
        assert_eq!(model.columns_controls().len(), 1);
    }

    #[test]
    fn test_controlled_config_announces_to_late_listener() {
        let config = MultiCheckConfig::from_toml_str(
            r#"
            values = ["1"]

            [[options]]
            label = "Option 1"
            value = "1"

            [[options]]
            label = "Option 2"
            value = "2"
            "#,
        )
        .unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        let model = config.into_model().with_on_change(tx);

        let notes: Vec<Vec<CheckOption>> = rx.try_iter().collect();
        assert_eq!(notes, vec![vec![CheckOption::new("Option 1", "1")]]);
        assert!(model.is_checked("1"));
    }

    #[test]
    fn test_parse_error() {
        let err = MultiCheckConfig::from_toml_str("columns = \"two\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().starts_with("invalid multicheck configuration"));
    }

    #[test]
    fn test_missing_file() {
        let err = MultiCheckConfig::load("/definitely/not/here/multicheck.toml").unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("multicheck.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = MultiCheckConfig {
            label: Some("Numbers".to_string()),
            columns: 3,
            values: Some(vec!["2".to_string()]),
            options: vec![CheckOption::new("One", "1"), CheckOption::new("Two", "2")],
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(MultiCheckConfig::from_toml_str(&text).unwrap(), config);
    }
}
