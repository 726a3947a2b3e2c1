//! The `TraceLog` context: enable flag, resolved target, and the lock that
//! serializes every check-format-write sequence.
//!
//! The context is an explicit object with a documented process-wide
//! lifecycle rather than a hidden global: embedders and tests build their
//! own with [`TraceLog::builder`], while ordinary callers reach the lazily
//! constructed process singleton through [`TraceLog::global`].

mod builder;

pub use builder::TraceLogBuilder;

use crate::config::Config;
use crate::error::Error;
use crate::render::render;
use crate::sink::Sink;
use crate::toggle::Toggle;
use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Default render buffer capacity in characters.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Capacity floor: the buffer must always hold at least a full path worth
/// of prefix, so smaller requests are clamped up.
pub const MIN_CAPACITY: usize = 260;

/// `OnceLock` guarantees the singleton is initialized exactly once, even if
/// multiple threads race to the first trace call.
static GLOBAL: OnceLock<TraceLog> = OnceLock::new();

/// Process-wide trace context.
///
/// One sink is active per context. The sink sits behind a mutex held for
/// the whole enabled-check + format + write sequence, so interleaved calls
/// from different threads never interleave their bytes at the destination.
pub struct TraceLog {
    /// Best-effort flag: stored and read relaxed, not linearized with the
    /// writes it gates.
    enabled: AtomicBool,
    /// Resolved at construction and stable for the context's lifetime.
    target: String,
    capacity: usize,
    toggle: Option<Toggle>,
    sink: Mutex<Box<dyn Sink>>,
}

/// Hand-written because the sink trait object can't be derived over; the
/// sink is represented by its resolved descriptor.
impl fmt::Debug for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceLog")
            .field("enabled", &self.enabled.load(Ordering::Relaxed))
            .field("target", &self.target)
            .field("capacity", &self.capacity)
            .field("toggle", &self.toggle)
            .finish_non_exhaustive()
    }
}

impl Default for TraceLog {
    /// Console sink, enabled, default capacity, no external toggle.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TraceLog {
    /// Returns a builder for assembling a context step by step.
    #[must_use]
    pub fn builder() -> TraceLogBuilder {
        TraceLogBuilder::new()
    }

    /// Returns the process-wide context, constructing it on first call from
    /// the on-disk config, or from defaults when the config is missing or
    /// broken. Initialization never fails and later calls are no-ops.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            Config::load()
                .and_then(|config| Self::from_config(&config))
                .unwrap_or_default()
        })
    }

    /// Installs a caller-built context as the process-wide singleton.
    ///
    /// The first initializer wins: if the singleton already exists (via an
    /// earlier `init_global` or `global` call) the passed context is
    /// dropped and the existing one is returned.
    pub fn init_global(log: Self) -> &'static Self {
        GLOBAL.get_or_init(|| log)
    }

    /// Builds a context from configuration, resolving the sink path
    /// (environment variables and `~`) exactly once.
    ///
    /// # Errors
    /// Rejects unknown sink kinds or encodings, a file sink without a path,
    /// and paths that fail expansion.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let mut builder = Self::builder()
            .enabled(config.general.enabled)
            .capacity(config.general.capacity);

        builder = match config.sink.kind.as_str() {
            "console" => builder.console(),
            "debug" => builder.debug_channel(),
            "file" => {
                let raw = config
                    .sink
                    .path
                    .as_deref()
                    .ok_or_else(|| Error::InvalidPath("file sink requires a path".to_string()))?;
                let path = expand(raw)?;
                match config.sink.encoding.as_str() {
                    "utf8" => builder.file(path),
                    "utf16le" => builder.file_utf16(path),
                    other => return Err(Error::UnknownEncoding(other.to_string())),
                }
            }
            other => return Err(Error::UnknownSink(other.to_string())),
        };

        if let Some(raw) = config.toggle.path.as_deref() {
            builder = builder.toggle_path(expand(raw)?);
        }

        Ok(builder.build())
    }

    /// Sets the enable flag. Deliberately unsynchronized with in-flight
    /// writes; a concurrent trace may still observe the old value.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// True when the flag is set and the external toggle (if configured)
    /// does not report suppression. The toggle is re-read on every call, so
    /// an operator can silence a running process without restarting it.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        if !self.enabled.load(Ordering::Relaxed) {
            return false;
        }
        self.toggle.as_ref().is_none_or(|t| !t.suppressed())
    }

    /// Resolved identifier of the active sink: a file path or a pseudo-name
    /// such as `"con"`. Stable for the context's lifetime.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Render buffer capacity in characters, after clamping.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The format-and-trace entry point. Under the lock: check enabled
    /// (flag plus external toggle), render `"<file> (<line>): "` + message
    /// into the bounded buffer, write. Disabled calls release the lock with
    /// no side effect; sink failures are swallowed.
    pub fn trace(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        let mut sink = self.lock_sink();
        if !self.is_enabled() {
            return;
        }
        let text = render(self.capacity, file, line, args);
        let _ = sink.write(&text);
    }

    /// Raw write of a pre-formatted string: no source-location prefix, no
    /// truncation. Checks only the in-process flag, not the external
    /// toggle. Sink failures are swallowed.
    pub fn write(&self, text: &str) {
        let mut sink = self.lock_sink();
        if !self.enabled.load(Ordering::Relaxed) {
            return;
        }
        let _ = sink.write(text);
    }

    /// A panicked trace call must not silence every thread for the rest of
    /// the process, so poisoning is ignored.
    fn lock_sink(&self) -> MutexGuard<'_, Box<dyn Sink>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Environment-variable and tilde expansion, applied once at construction.
fn expand(raw: &str) -> Result<String, Error> {
    shellexpand::full(raw)
        .map(Cow::into_owned)
        .map_err(|e| Error::InvalidPath(e.to_string()))
}
