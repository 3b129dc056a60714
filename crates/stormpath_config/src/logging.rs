//! Log sinks for configuration dumps.
//!
//! [`crate::strategies::DebugConfig`] writes through an injected [`LogSink`].
//! The default sink forwards to `tracing`; there is no process-wide mutable
//! logger state.

/// Target used by [`TracingLogSink`] events.
pub const DEBUG_TARGET: &str = "stormpath_config::debug";

/// Destination for debug-level configuration messages.
pub trait LogSink: Send + Sync {
    /// Emits `message` at debug level. `logger` is the optional logger name
    /// the caller asked for.
    fn debug(&self, logger: Option<&str>, message: &str);
}

/// Sink that emits `tracing` debug events.
///
/// Events use the [`DEBUG_TARGET`] target and carry the requested logger
/// name in a `logger` field, so subscribers can filter on either.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn debug(&self, logger: Option<&str>, message: &str) {
        match logger {
            Some(name) => tracing::debug!(target: DEBUG_TARGET, logger = name, "{}", message),
            None => tracing::debug!(target: DEBUG_TARGET, "{}", message),
        }
    }
}
