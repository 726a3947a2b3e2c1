//! Debug-channel sink: forwards text to the process's diagnostic stream
//! (stderr) with no file I/O.

use super::Sink;
use std::io::{self, Write};

const DEBUG_DESCRIPTOR: &str = "debug";

/// Forwards rendered text to the debug-output channel.
///
/// Stderr is unbuffered and separate from the console sink's stdout, so
/// debug traces survive stdout redirection and abrupt exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugSink;

impl DebugSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for DebugSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        io::stderr().lock().write_all(text.as_bytes())
    }

    fn descriptor(&self) -> &str {
        DEBUG_DESCRIPTOR
    }
}
