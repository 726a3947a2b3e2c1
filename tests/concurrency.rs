//! Lock discipline: concurrent trace calls under the file sink never
//! interleave their bytes.

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use tracelog::TraceLog;

const THREADS: usize = 8;
const PER_THREAD: usize = 25;

#[test]
fn concurrent_traces_produce_whole_distinct_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("concurrent.log");
    let log = Arc::new(TraceLog::builder().file(&path).build());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    log.trace("worker.rs", 1, format_args!("thread={t} msg={i}\n"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    // Every expected message arrived exactly once and fully formed.
    let seen: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(seen.len(), THREADS * PER_THREAD);
    for t in 0..THREADS {
        for i in 0..PER_THREAD {
            let expected = format!("worker.rs (1): thread={t} msg={i}");
            assert!(seen.contains(expected.as_str()), "missing: {expected}");
        }
    }
}

#[test]
fn concurrent_enable_flips_never_tear_output() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("flips.log");
    let log = Arc::new(TraceLog::builder().file(&path).build());

    let tracer = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for i in 0..100 {
                log.trace("f.rs", 1, format_args!("line {i}\n"));
            }
        })
    };
    let flipper = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for i in 0..100 {
                log.set_enabled(i % 2 == 0);
            }
            log.set_enabled(true);
        })
    };
    tracer.join().unwrap();
    flipper.join().unwrap();

    // Some lines may be dropped while disabled; the ones that land are whole.
    let content = fs::read_to_string(&path).unwrap_or_default();
    for line in content.lines() {
        assert!(line.starts_with("f.rs (1): line "));
    }
}
