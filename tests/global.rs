//! Tests for the process-wide singleton.
//!
//! Kept in their own integration binary: the singleton is per-process, so
//! these tests must fully control which initializer runs first.

use tracelog::{MemorySink, TraceLog};

#[test]
fn init_global_wins_once_and_stays_stable() {
    let sink = MemorySink::new();
    let log = TraceLog::builder().sink(sink.clone()).build();

    let first = TraceLog::init_global(log);
    assert_eq!(first.target(), "memory");

    // Later initializers are no-ops; the existing instance is returned.
    let other = TraceLog::builder().file("/tmp/other.log").build();
    let second = TraceLog::init_global(other);
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.target(), "memory");

    // global() hands back the same instance, and the macro routes to it.
    let fetched = TraceLog::global();
    assert!(std::ptr::eq(first, fetched));

    tracelog::trace!("through the singleton");
    assert!(sink.contents().contains("): through the singleton"));
}
