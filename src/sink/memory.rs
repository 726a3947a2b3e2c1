//! In-memory sink for tests: captures every write so assertions can inspect
//! exactly what reached the destination.

use super::Sink;
use std::io;
use std::sync::{Arc, Mutex};

const MEMORY_DESCRIPTOR: &str = "memory";

/// Captures rendered text in memory.
///
/// Clones share the same capture buffer, so a test can hand one clone to the
/// builder and read back through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, in order, verbatim.
    ///
    /// # Panics
    /// Panics if a previous holder panicked while capturing; acceptable in
    /// the test contexts this sink is meant for.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// All captured text concatenated in write order.
    #[must_use]
    pub fn contents(&self) -> String {
        self.writes().concat()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.lock().unwrap().is_empty()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writes
            .lock()
            .map_err(|_| io::Error::other("capture buffer poisoned"))?
            .push(text.to_string());
        Ok(())
    }

    fn descriptor(&self) -> &str {
        MEMORY_DESCRIPTOR
    }
}
