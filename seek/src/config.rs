//! Configuration for seek.
//!
//! Config file resolution order:
//! 1. Explicit path passed to Config::load_from()
//! 2. SEEK_CONFIG environment variable
//! 3. Default: <config dir>/seek/config.toml (e.g. ~/.config/seek/config.toml)
//!
//! A missing file is not an error; defaults are used.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fuzzy::FuzzyMatcher;
use crate::matcher::Matcher;
use crate::{Error, Result};

/// seek configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where this config was loaded from (or will be saved to).
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Fuzzy name matching tolerance.
    #[serde(default)]
    pub fuzzy: FuzzyMatcher,
}

impl Config {
    /// Create a default config bound to the given file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            fuzzy: FuzzyMatcher::default(),
        }
    }

    /// Load config from the default location, or create default.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
            config.config_path = config_path.to_path_buf();
            debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::with_path(config_path))
        }
    }

    /// Save config to its path, creating parent directories.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&self.config_path, contents)?;
        Ok(())
    }

    /// Matcher using this config's fuzzy settings.
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.fuzzy)
    }
}

/// Resolve the config file path using the standard resolution order.
fn resolve_config_path() -> Result<PathBuf> {
    // 1. Environment variable
    if let Ok(path) = std::env::var("SEEK_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    // 2. XDG config directory (via directories crate)
    if let Some(proj_dirs) = ProjectDirs::from("", "", "seek") {
        return Ok(proj_dirs.config_dir().join("config.toml"));
    }

    // 3. Fallback to ~/.config/seek
    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".config/seek/config.toml"))
}
