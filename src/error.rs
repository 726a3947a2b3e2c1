//! Unified error type for all tracelog operations.
//!
//! Only configuration and construction are fallible. Trace calls themselves
//! never return errors: a sink that cannot be opened or written drops the
//! message silently.

/// Error type for tracelog configuration and construction.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid or unexpandable path.
    InvalidPath(String),
    /// Unknown sink kind in config.
    UnknownSink(String),
    /// Unknown file encoding in config.
    UnknownEncoding(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
            Self::UnknownSink(s) => write!(f, "unknown sink kind: {s}"),
            Self::UnknownEncoding(s) => write!(f, "unknown encoding: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
