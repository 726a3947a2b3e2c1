//! The built-in sinks (console, debug channel, file) can't cover every use
//! case — the `Sink` trait lets embedders and tests substitute their own
//! destination, such as the in-memory [`MemorySink`].

mod console;
mod debug;
mod file;
mod memory;

pub use console::ConsoleSink;
pub use debug::DebugSink;
pub use file::{Encoding, FileSink};
pub use memory::MemorySink;

use std::io;

/// Destination for rendered trace lines.
///
/// `write` takes the text verbatim: the caller has already applied the
/// source-location prefix and truncation, and no newline is appended. The
/// `io::Result` keeps sinks composable and testable; the [`TraceLog`] writer
/// discards it, so a failing sink silently drops the message.
///
/// `Send` is required because the active sink lives behind the context's
/// lock and may be driven from any caller thread.
///
/// [`TraceLog`]: crate::TraceLog
pub trait Sink: Send {
    /// Writes one rendered string to the destination.
    ///
    /// # Errors
    /// I/O errors from the underlying destination (stdout, stderr, file).
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Resolved identifier of the destination, for diagnostics: a file path
    /// or a pseudo-name such as `"con"`.
    fn descriptor(&self) -> &str;
}
