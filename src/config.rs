//! Configuration.
//!
//! An optional TOML file supplies defaults; command-line flags win over
//! file values. Nothing here affects widget semantics; it picks the
//! theme, the log destination, and the screen mode.
//!
//! File location: `<config dir>/drill-tui/config.toml` (absent is fine).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};
use crate::theme::{get_preset, Theme};

/// File-backed settings. Every field optional; unknown keys rejected so
/// typos surface instead of silently doing nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theme preset name.
    pub theme: Option<String>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
    /// Use the alternate screen buffer (default true).
    pub alt_screen: Option<bool>,
}

impl Config {
    /// Default config file location, if a config dir exists on this
    /// platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("drill-tui").join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults;
    /// an unreadable or malformed file is an error.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DrillError::config(path, e.to_string()))?;
        toml::from_str(&raw).map_err(|e| DrillError::config(path, e.to_string()))
    }

    /// Resolve the theme, CLI value first, then file, then the default
    /// terminal preset. Unknown names are an error, not a fallback.
    pub fn resolve_theme(&self, cli_theme: Option<&str>) -> Result<Theme> {
        match cli_theme.or(self.theme.as_deref()) {
            Some(name) => get_preset(name).ok_or_else(|| DrillError::unknown_theme(name)),
            None => Ok(Theme::default()),
        }
    }

    /// Resolve the log file, CLI value first, then file, then a file in
    /// the system temp dir.
    pub fn resolve_log_file(&self, cli_log_file: Option<&Path>) -> PathBuf {
        cli_log_file
            .map(Path::to_path_buf)
            .or_else(|| self.log_file.clone())
            .unwrap_or_else(|| std::env::temp_dir().join("drill-tui.log"))
    }

    /// Resolve the screen mode; the CLI flag can only turn the alternate
    /// screen off.
    pub fn resolve_alt_screen(&self, cli_no_alt_screen: bool) -> bool {
        if cli_no_alt_screen {
            return false;
        }
        self.alt_screen.unwrap_or(true)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_file() {
        let (_dir, path) = write_config("theme = \"dracula\"\nalt_screen = false\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme.as_deref(), Some("dracula"));
        assert_eq!(config.alt_screen, Some(false));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let (_dir, path) = write_config("theem = \"dracula\"\n");
        assert!(matches!(
            Config::load_from(&path),
            Err(DrillError::Config { .. })
        ));
    }

    #[test]
    fn test_cli_theme_wins_over_file() {
        let config = Config {
            theme: Some("dracula".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme(Some("nord")).unwrap().name, "nord");
        assert_eq!(config.resolve_theme(None).unwrap().name, "dracula");
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let config = Config::default();
        assert!(matches!(
            config.resolve_theme(Some("neon")),
            Err(DrillError::UnknownTheme { .. })
        ));
    }

    #[test]
    fn test_default_theme_when_unset() {
        let config = Config::default();
        assert_eq!(config.resolve_theme(None).unwrap().name, "terminal");
    }

    #[test]
    fn test_resolve_alt_screen() {
        let config = Config {
            alt_screen: Some(true),
            ..Config::default()
        };
        assert!(config.resolve_alt_screen(false));
        assert!(!config.resolve_alt_screen(true), "CLI flag forces it off");
        assert!(Config::default().resolve_alt_screen(false));
    }

    #[test]
    fn test_resolve_log_file_precedence() {
        let config = Config {
            log_file: Some(PathBuf::from("/from/file.log")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_log_file(Some(Path::new("/from/cli.log"))),
            PathBuf::from("/from/cli.log")
        );
        assert_eq!(
            config.resolve_log_file(None),
            PathBuf::from("/from/file.log")
        );
    }
}
