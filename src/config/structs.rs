//! Configuration struct definitions.

use serde::Deserialize;

/// A completely empty config file must still produce a working logger —
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Enable flag and buffer capacity apply regardless of sink choice.
    pub general: GeneralConfig,
    /// Which destination rendered lines go to, and how.
    pub sink: SinkConfig,
    /// External suppression toggle, off unless a path is given.
    pub toggle: ToggleConfig,
}

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial enabled state.
    pub enabled: bool,
    /// Render buffer capacity in characters. Values below the floor of 260
    /// are clamped up at construction time.
    pub capacity: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 1024,
        }
    }
}

/// Sink selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Sink kind: "console", "debug", or "file".
    pub kind: String,
    /// Target path for the file sink. Environment variables and `~` are
    /// expanded once, when the context is built.
    pub path: Option<String>,
    /// File encoding: "utf8" or "utf16le". Ignored for non-file sinks.
    pub encoding: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: "console".to_string(),
            path: None,
            encoding: "utf8".to_string(),
        }
    }
}

/// External toggle configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ToggleConfig {
    /// Path of the toggle file. `None` disables the external toggle.
    pub path: Option<String>,
}
