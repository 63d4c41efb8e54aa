//! Structured error types for the drill-tui library.
//!
//! Uses `thiserror` so library consumers get composable errors; the
//! binary wraps these in `anyhow` for context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for drill-tui operations.
#[derive(Error, Debug)]
pub enum DrillError {
    /// Terminal or file I/O failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// Unknown theme name
    #[error("Unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    /// Page layout computation failed
    #[error("Layout error: {reason}")]
    Layout { reason: String },
}

/// Result type alias for drill-tui operations.
pub type Result<T> = std::result::Result<T, DrillError>;

impl DrillError {
    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown-theme error listing the valid names.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme {
            name: name.into(),
            available: crate::theme::preset_names().join(", "),
        }
    }

    /// Create a layout error.
    pub fn layout(reason: impl std::fmt::Display) -> Self {
        Self::Layout {
            reason: reason.to_string(),
        }
    }
}
