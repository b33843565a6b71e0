//! Locates and loads the configuration for a run.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>`
//! 2. `loglinter.toml`, then `.loglinter.toml`, in the checked directory
//! 3. `config.toml` in `$LOGLINTER_CONFIG_DIR`, or in `~/.loglinter/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use loglinter_core::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PROJECT_FILES: &[&str] = &["loglinter.toml", ".loglinter.toml"];
const GLOBAL_FILE: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "LOGLINTER_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the checked sources.
    Project(PathBuf),
    /// Found in the per-user config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the file to read, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and parses the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            debug!("No config file found, using defaults");
            return Ok(Config::default());
        };

        if matches!(self, Self::Global(_)) {
            info!("Using global config: {}", path.display());
        }

        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves a [`ConfigSource`] for a project directory.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    global_dir: Option<PathBuf>,
}

impl ConfigResolver {
    /// Uses `$LOGLINTER_CONFIG_DIR`, falling back to `~/.loglinter/`.
    #[must_use]
    pub fn from_env() -> Self {
        let global_dir = std::env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|h| h.join(".loglinter")));
        Self { global_dir }
    }

    /// Uses `dir` as the per-user config directory.
    #[must_use]
    pub fn with_global_dir(dir: Option<PathBuf>) -> Self {
        Self { global_dir: dir }
    }

    /// Picks the configuration file for `project_dir`.
    ///
    /// An explicit path is returned as given, even when it does not exist, so
    /// that loading reports the missing file.
    #[must_use]
    pub fn resolve(&self, project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }

        if let Some(found) = PROJECT_FILES
            .iter()
            .map(|name| project_dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            debug!("Found project config: {}", found.display());
            return ConfigSource::Project(found);
        }

        self.global_dir
            .as_ref()
            .map(|dir| dir.join(GLOBAL_FILE))
            .filter(|candidate| candidate.is_file())
            .map_or(ConfigSource::Default, |found| {
                debug!("Found global config: {}", found.display());
                ConfigSource::Global(found)
            })
    }
}
