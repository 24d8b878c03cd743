pub mod game;

// ============================================================================
// Profiling Macros
// ============================================================================

/// Log on a tick cadence when the `perf_stats` feature is enabled.
///
/// Emits an `info!` every 100 simulation ticks. Without `perf_stats` the
/// macro expands to an empty block and its arguments are never evaluated.
///
/// # Example
/// ```ignore
/// profile_log!(tick, "Tracking {} targets", controller.targets().count());
/// ```
#[macro_export]
#[cfg(feature = "perf_stats")]
macro_rules! profile_log {
    ($tick:expr, $($arg:tt)*) => {
        if $tick.0 % 100 == 0 {
            bevy::prelude::info!($($arg)*);
        }
    };
}

#[macro_export]
#[cfg(not(feature = "perf_stats"))]
macro_rules! profile_log {
    ($tick:expr, $($arg:tt)*) => {};
}
