//! External suppression toggle.
//!
//! A small TOML file at a configured path lets an operator silence a running
//! process's tracing without restarting it — the portable counterpart of a
//! per-user registry switch. The file is read on every check, deliberately
//! uncached, so edits take effect on the very next trace call.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Externally persisted on/off switch consulted by
/// [`TraceLog::is_enabled`](crate::TraceLog::is_enabled).
#[derive(Debug, Clone)]
pub struct Toggle {
    path: PathBuf,
}

/// `disable_logging = true` suppresses; anything else does not.
#[derive(Debug, Deserialize)]
struct ToggleFile {
    #[serde(default)]
    disable_logging: bool,
}

impl Toggle {
    /// The path must already be resolved; no expansion happens here.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the toggle file. A missing file, an unreadable file,
    /// a parse failure, or an absent key all mean "not suppressed": the
    /// toggle can only ever silence tracing, never break it.
    #[must_use]
    pub fn suppressed(&self) -> bool {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return false;
        };
        toml::from_str::<ToggleFile>(&content).is_ok_and(|t| t.disable_logging)
    }
}
