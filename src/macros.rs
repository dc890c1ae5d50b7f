/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
///
/// Without the feature the invocation expands to `()`, so call sites do not
/// need their own `#[cfg]` guards.
///
/// ```rust,ignore
/// trace_debug!(vertices = n, "computing bridges");
/// ```
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)+) => {
        ::tracing::debug!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)+) => {
        ()
    };
}

pub(crate) use trace_debug;
