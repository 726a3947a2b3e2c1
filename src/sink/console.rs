//! Console sink: appends to standard output with no per-call open/close
//! overhead.

use super::Sink;
use std::io::{self, Write};

/// The console pseudo-target resolves to the fixed descriptor `"con"`.
const CONSOLE_DESCRIPTOR: &str = "con";

/// Appends rendered text to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        io::stdout().lock().write_all(text.as_bytes())
    }

    fn descriptor(&self) -> &str {
        CONSOLE_DESCRIPTOR
    }
}
