//! Diagnostic sink for encode/decode progress messages.
//!
//! The transforms never log on their own; callers inject a sink so the core
//! stays side-effect-free and testable. Two severities exist: `note` for the
//! expected skip of non-archive inputs, and `debug` for successful
//! transformations. Host tools (a VCS filter hook, a CLI) route these
//! wherever their own user interface wants them.

/// Receiver for diagnostic messages emitted by the filter entry points.
pub trait DiagnosticSink {
    /// An expected, non-fatal condition worth surfacing to an attentive user.
    fn note(&self, message: &str);

    /// Progress detail, normally hidden unless verbose output is requested.
    fn debug(&self, message: &str);
}

/// Sink that discards all messages.
///
/// The default choice for library callers that only care about the returned
/// bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn note(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Sink that forwards messages to the [`log`] facade under the `zipdoc`
/// target.
///
/// `note` maps to `info` and `debug` to `debug`, so whatever logger the host
/// application installed decides visibility.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn note(&self, message: &str) {
        log::info!(target: "zipdoc", "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: "zipdoc", "{message}");
    }
}
