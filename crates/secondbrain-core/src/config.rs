//! Configuration management for SecondBrain
//!
//! Settings live in a TOML file (by default `.secondbrain/config.toml` in the
//! working directory). Every key is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{BrainError, Result};

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".secondbrain/config.toml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrainConfig {
    /// JSON seed file to start the ward from instead of the built-in lists
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Where interactive mode writes its log
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Terminal UI settings
    #[serde(default)]
    pub tui: TuiConfig,
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Show the keybinding footer
    #[serde(default = "default_show_help")]
    pub show_help: bool,
}

fn default_tick_ms() -> u64 {
    250
}

fn default_show_help() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            show_help: default_show_help(),
        }
    }
}

impl BrainConfig {
    /// Load configuration from `path`, or use defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| {
                BrainError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Write this configuration as TOML, creating parent directories
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| BrainError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrainConfig::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert!(config.seed_file.is_none());
        assert_eq!(config.tui.tick_ms, 250);
        assert!(config.tui.show_help);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "seed_file = \"ward.json\"\n\n[tui]\ntick_ms = 100\n").unwrap();

        let config = BrainConfig::load_or_default(&path).unwrap();
        assert_eq!(config.seed_file, Some(PathBuf::from("ward.json")));
        assert_eq!(config.tui.tick_ms, 100);
        assert!(config.tui.show_help);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tui = 3").unwrap();

        let result = BrainConfig::load_or_default(&path);
        assert!(matches!(result, Err(BrainError::Config(_))));
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".secondbrain/config.toml");
        let mut config = BrainConfig::default();
        config.log_file = Some(PathBuf::from("/tmp/secondbrain.log"));
        config.write(&path).unwrap();

        let loaded = BrainConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded.log_file, config.log_file);
    }
}
