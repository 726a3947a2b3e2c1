//! Tests for context construction and the trace/write entry points.

use tracelog::{MemorySink, TraceLog, state};

#[test]
fn builder_defaults_to_console() {
    let log = TraceLog::builder().build();
    assert_eq!(log.target(), "con");
    assert!(log.is_enabled());
    assert_eq!(log.capacity(), state::DEFAULT_CAPACITY);
}

#[test]
fn debug_channel_descriptor() {
    let log = TraceLog::builder().debug_channel().build();
    assert_eq!(log.target(), "debug");
}

#[test]
fn file_sink_descriptor_is_path() {
    let log = TraceLog::builder().file("/tmp/trace.log").build();
    assert_eq!(log.target(), "/tmp/trace.log");
}

#[test]
fn capacity_clamped_to_floor() {
    let log = TraceLog::builder().capacity(10).build();
    assert_eq!(log.capacity(), state::MIN_CAPACITY);
}

#[test]
fn trace_renders_source_location_prefix() {
    let sink = MemorySink::new();
    let log = TraceLog::builder().sink(sink.clone()).build();

    log.trace("main.rs", 42, format_args!("hello {}", "world"));

    assert_eq!(sink.writes(), vec!["main.rs (42): hello world".to_string()]);
}

#[test]
fn trace_macro_captures_file_and_line() {
    let sink = MemorySink::new();
    let log = TraceLog::builder().sink(sink.clone()).build();

    tracelog::trace_to!(log, "value={}", 7);

    let out = sink.contents();
    assert!(out.contains("tests/state.rs ("));
    assert!(out.ends_with("): value=7"));
}

#[test]
fn disabled_trace_writes_nothing() {
    let sink = MemorySink::new();
    let log = TraceLog::builder().sink(sink.clone()).enabled(false).build();

    log.trace("f.rs", 1, format_args!("dropped"));
    log.write("dropped too");

    assert!(sink.is_empty());
}

#[test]
fn set_enabled_flips_at_runtime() {
    let sink = MemorySink::new();
    let log = TraceLog::builder().sink(sink.clone()).build();

    log.set_enabled(false);
    assert!(!log.is_enabled());
    log.trace("f.rs", 1, format_args!("one"));

    log.set_enabled(true);
    assert!(log.is_enabled());
    log.trace("f.rs", 2, format_args!("two"));

    assert_eq!(sink.writes(), vec!["f.rs (2): two".to_string()]);
}

#[test]
fn debug_output_reports_target_and_state() {
    let log = TraceLog::builder().file("/tmp/trace.log").build();
    let repr = format!("{log:?}");
    assert!(repr.contains("TraceLog"));
    assert!(repr.contains("/tmp/trace.log"));
    assert!(repr.contains("enabled: true"));
}

#[test]
fn raw_write_passes_text_verbatim() {
    let sink = MemorySink::new();
    let log = TraceLog::builder().sink(sink.clone()).build();

    log.write("no prefix, no newline");

    assert_eq!(sink.writes(), vec!["no prefix, no newline".to_string()]);
}
