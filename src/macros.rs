/// Emits a `tracing` event at trace level when the `tracing` feature is
/// enabled, and nothing otherwise.
///
/// Only usable in statement position.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}
