//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic (default
//! location, file I/O) stays independent of the serde schema. The config
//! replaces what the original facility decided at compile time: sink
//! selection, buffer capacity, and the external toggle location.

mod structs;

pub use structs::{Config, GeneralConfig, SinkConfig, ToggleConfig};

use crate::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "tracelog.toml";

impl Config {
    /// Loads configuration from the default per-user location. A missing
    /// file is not an error: defaults (console sink, enabled, capacity 1024)
    /// apply.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, Error> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default
    /// location. Useful for embedders and tests.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default config file location under the user's config directory.
    ///
    /// # Errors
    /// Returns [`Error::ConfigDirNotFound`] when no home directory can be
    /// determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        directories::ProjectDirs::from("", "", "tracelog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(Error::ConfigDirNotFound)
    }
}
