//! Direct `TraceLog` construction would require knowing every sink's
//! internals — the builder hides that behind a stepwise API.

use super::{DEFAULT_CAPACITY, MIN_CAPACITY, TraceLog};
use crate::sink::{ConsoleSink, DebugSink, Encoding, FileSink, Sink};
use crate::toggle::Toggle;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;

/// Builder for [`TraceLog`]. Selecting a sink replaces any earlier choice:
/// exactly one sink is active per context.
#[derive(Default)]
pub struct TraceLogBuilder {
    sink: Option<Box<dyn Sink>>,
    capacity: Option<usize>,
    enabled: Option<bool>,
    toggle: Option<Toggle>,
}

impl TraceLogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard-output sink, the default when no sink is chosen.
    #[must_use]
    pub fn console(mut self) -> Self {
        self.sink = Some(Box::new(ConsoleSink::new()));
        self
    }

    /// Debug-channel sink (stderr, no file I/O).
    #[must_use]
    pub fn debug_channel(mut self) -> Self {
        self.sink = Some(Box::new(DebugSink::new()));
        self
    }

    /// Byte-oriented file sink appending UTF-8 at `path`. The path is taken
    /// as-is; [`TraceLog::from_config`] is where expansion happens.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = Some(Box::new(FileSink::new(path, Encoding::Utf8)));
        self
    }

    /// Wide-output file sink appending raw UTF-16LE at `path`.
    #[must_use]
    pub fn file_utf16(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = Some(Box::new(FileSink::new(path, Encoding::Utf16Le)));
        self
    }

    /// The built-in sinks can't cover every use case; tests substitute an
    /// in-memory sink here.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Render buffer capacity in characters. Values below
    /// [`MIN_CAPACITY`](super::MIN_CAPACITY) are clamped up at build time.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Initial enabled state; defaults to enabled.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// External suppression toggle file, re-read on every enabled check.
    #[must_use]
    pub fn toggle_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.toggle = Some(Toggle::new(path));
        self
    }

    /// Resolves the target descriptor and freezes the configuration. The
    /// sink stays swappable only through the context's own lock.
    #[must_use]
    pub fn build(self) -> TraceLog {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new()) as Box<dyn Sink>);
        let target = sink.descriptor().to_string();
        TraceLog {
            enabled: AtomicBool::new(self.enabled.unwrap_or(true)),
            target,
            capacity: self.capacity.unwrap_or(DEFAULT_CAPACITY).max(MIN_CAPACITY),
            toggle: self.toggle,
            sink: Mutex::new(sink),
        }
    }
}
