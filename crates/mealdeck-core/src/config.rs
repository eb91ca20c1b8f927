//! Configuration management for mealdeck.
//!
//! Loads configuration from ${MEALDECK_HOME}/config.toml with sensible
//! defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tab the main stack opens on after login/restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    #[default]
    Dashboard,
    Meals,
    Groceries,
    Profile,
}

impl StartTab {
    /// Returns the short display name for this tab.
    pub fn display_name(&self) -> &'static str {
        match self {
            StartTab::Dashboard => "dashboard",
            StartTab::Meals => "meals",
            StartTab::Groceries => "groceries",
            StartTab::Profile => "profile",
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab shown first when the main stack mounts.
    pub start_tab: StartTab,

    /// Whether the meals tab lists the week starting on Monday.
    pub week_starts_monday: bool,

    /// Default log filter directive (overridden by MEALDECK_LOG).
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_tab: StartTab::default(),
            week_starts_monday: true,
            log_filter: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

pub mod paths {
    //! Path resolution for mealdeck configuration and data directories.
    //!
    //! MEALDECK_HOME resolution order:
    //! 1. MEALDECK_HOME environment variable (if set)
    //! 2. ~/.config/mealdeck (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if resolvable.
    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(unix)]
        let var = std::env::var_os("HOME");
        #[cfg(not(unix))]
        let var = std::env::var_os("USERPROFILE");
        var.filter(|v| !v.is_empty()).map(PathBuf::from)
    }

    /// Returns the mealdeck home directory.
    ///
    /// Checks MEALDECK_HOME env var first, falls back to ~/.config/mealdeck
    pub fn mealdeck_home() -> PathBuf {
        if let Ok(home) = std::env::var("MEALDECK_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("mealdeck"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        mealdeck_home().join("config.toml")
    }

    /// Returns the path to the secret store file.
    pub fn secrets_path() -> PathBuf {
        mealdeck_home().join("secrets.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        mealdeck_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: missing file loads defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.start_tab, StartTab::Dashboard);
        assert!(config.week_starts_monday);
        assert!(config.log_filter.is_none());
    }

    /// Test: partial config keeps defaults for unset fields.
    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "start_tab = \"groceries\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.start_tab, StartTab::Groceries);
        assert!(config.week_starts_monday);
    }

    /// Test: the embedded template parses into the defaults.
    #[test]
    fn test_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed.start_tab, Config::default().start_tab);
        assert_eq!(parsed.week_starts_monday, Config::default().week_starts_monday);
    }

    /// Test: init refuses to overwrite an existing file.
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# existing").unwrap();

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    /// Test: garbage config is a parse error, not silent defaults.
    #[test]
    fn test_invalid_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "start_tab = 7\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
