//! Trace macros capturing the caller's source location.

/// Traces through the process-wide context, prefixing the caller's file and
/// line.
///
/// ```no_run
/// tracelog::trace!("connected to {} in {}ms\n", "db", 12);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::TraceLog::global().trace(
            ::std::file!(),
            ::std::line!(),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Traces through an explicit [`TraceLog`](crate::TraceLog), prefixing the
/// caller's file and line. Embedders holding their own context use this
/// instead of [`trace!`](crate::trace).
#[macro_export]
macro_rules! trace_to {
    ($log:expr, $($arg:tt)+) => {
        $log.trace(
            ::std::file!(),
            ::std::line!(),
            ::std::format_args!($($arg)+),
        )
    };
}
