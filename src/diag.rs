//! Diagnostic reporting.
//!
//! The core never writes to the console directly; non-fatal observations
//! during load and play go through a host-replaceable sink. The default
//! sink forwards to macroquad's logging macros.

use macroquad::prelude::{info, warn};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagLevel {
    /// Informational (e.g. load summary)
    Info,
    /// Something was skipped or defaulted
    Warn,
}

/// Host-provided diagnostic callback.
pub type DiagSink = Box<dyn Fn(DiagLevel, &str)>;

/// Sink that forwards to macroquad's logger.
pub fn default_sink() -> DiagSink {
    Box::new(|level, msg| match level {
        DiagLevel::Info => info!("{}", msg),
        DiagLevel::Warn => warn!("{}", msg),
    })
}
