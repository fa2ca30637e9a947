//! Error types.
//!
//! The widget itself never fails: bad input degrades to defined behavior.
//! Only loading a [`MultiCheckConfig`](crate::config::MultiCheckConfig) from
//! disk or text can produce an [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a widget configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML or has the wrong shape.
    #[error("invalid multicheck configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
