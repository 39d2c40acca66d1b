//! Diagnostics for soft-fail decode paths.
//!
//! Functions such as [`parse_code`](crate::parse_code) and
//! [`parse_url`](crate::parse_url) never return errors; they return `None`
//! and hand the error to a [`DiagnosticSink`]. The default sink forwards to the
//! `log` facade.

use std::sync::Mutex;

use crate::error::VisionaryError;

/// Receives errors swallowed by the soft-fail decode functions.
pub trait DiagnosticSink {
    /// Report an error. `context` names the operation that failed.
    fn report(&self, context: &str, error: &VisionaryError);
}

/// Sink that writes to the `log` crate at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, context: &str, error: &VisionaryError) {
        log::warn!("{}: {}", context, error);
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _context: &str, _error: &VisionaryError) {}
}

/// Sink that keeps every reported error, for inspection by the caller.
#[derive(Debug, Default)]
pub struct CollectingSink {
    errors: Mutex<Vec<(String, VisionaryError)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors reported so far, oldest first.
    pub fn errors(&self) -> Vec<(String, VisionaryError)> {
        match self.errors.lock() {
            Ok(errors) => errors.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, context: &str, error: &VisionaryError) {
        let mut errors = match self.errors.lock() {
            Ok(errors) => errors,
            Err(poisoned) => poisoned.into_inner(),
        };
        errors.push((context.to_string(), error.clone()));
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn report(&self, context: &str, error: &VisionaryError) {
        (**self).report(context, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report("parse_code", &VisionaryError::EmptyFileId);
        sink.report("parse_url", &VisionaryError::EmptyPayload);

        let errors = sink.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], ("parse_code".to_string(), VisionaryError::EmptyFileId));
        assert_eq!(errors[1].1, VisionaryError::EmptyPayload);
    }

    #[test]
    fn test_sink_by_reference() {
        fn report_through<S: DiagnosticSink>(sink: S) {
            sink.report("ctx", &VisionaryError::InvalidUtf8);
        }

        let sink = CollectingSink::new();
        report_through(&sink);
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn test_log_and_noop_sinks_do_not_panic() {
        LogSink.report("ctx", &VisionaryError::InvalidUtf8);
        NoopSink.report("ctx", &VisionaryError::InvalidUtf8);
    }
}
