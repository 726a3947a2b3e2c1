//! File sink: open in append mode, write, close — every call.
//!
//! Holding the file open would be faster, but reopening per call keeps the
//! sink robust against the target being deleted or rotated underneath a
//! long-running process.

use super::Sink;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// On-disk encoding of the file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Byte-oriented output: the rendered text's UTF-8 bytes as-is.
    #[default]
    Utf8,
    /// Wide output: raw UTF-16 code units, little-endian, no transcoding
    /// on the way back out.
    Utf16Le,
}

/// Appends rendered text to a file, one open/write/close cycle per call.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    // descriptor() returns &str, so the path is kept lossily stringified too
    target: String,
    encoding: Encoding,
}

impl FileSink {
    /// The path must already be resolved; no expansion happens here.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, encoding: Encoding) -> Self {
        let path = path.into();
        let target = path.to_string_lossy().into_owned();
        Self {
            path,
            target,
            encoding,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl Sink for FileSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        match self.encoding {
            Encoding::Utf8 => file.write_all(text.as_bytes()),
            Encoding::Utf16Le => {
                let mut bytes = Vec::with_capacity(text.len() * 2);
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_le_bytes());
                }
                file.write_all(&bytes)
            }
        }
    }

    fn descriptor(&self) -> &str {
        &self.target
    }
}
