#![forbid(unsafe_code)]

//! `tracelog` - Minimal source-location trace logging with pluggable sinks.
//!
//! Every trace call renders `"<file> (<line>): "` followed by the message
//! into a bounded buffer and hands it to exactly one configured sink, holding
//! a lock across the enabled-check, formatting, and write so concurrent
//! callers never interleave their bytes. Logging calls are fire-and-forget:
//! sink failures are swallowed, overlong messages are truncated, and nothing
//! ever propagates back to the caller.
//!
//! # Example
//!
//! ```
//! use tracelog::{MemorySink, TraceLog};
//!
//! let sink = MemorySink::new();
//! let log = TraceLog::builder().sink(sink.clone()).build();
//!
//! tracelog::trace_to!(log, "listening on port {}\n", 8080);
//!
//! assert!(sink.contents().contains("): listening on port 8080"));
//! ```
//!
//! A process-wide context is also available through [`TraceLog::global`] and
//! the [`trace!`](crate::trace) macro; it is constructed lazily from the
//! on-disk [`Config`] on first use.

pub mod config;
pub mod error;
pub mod sink;
pub mod state;
pub mod toggle;

mod macros;
mod render;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use sink::{ConsoleSink, DebugSink, Encoding, FileSink, MemorySink, Sink};
pub use state::{TraceLog, TraceLogBuilder};
pub use toggle::Toggle;
