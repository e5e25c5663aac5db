//! Sink that records diagnostics in memory.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::diagnostics::{Diagnostic, DiagnosticsSink, Severity};

/// Thread-safe sink that keeps every diagnostic in emission order.
///
/// # Examples
///
/// ```
/// use prapti::diagnostics::{DiagnosticsSinkExt, adapters::RecordingDiagnostics};
///
/// let sink = RecordingDiagnostics::new();
/// sink.error("field-not-found", "no such field 'x'", None);
/// assert_eq!(sink.count("field-not-found"), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries().clone()
    }

    /// Returns the recorded diagnostics with the given code.
    #[must_use]
    pub fn with_code(&self, code: &str) -> Vec<Diagnostic> {
        self.entries()
            .iter()
            .filter(|diagnostic| diagnostic.code == code)
            .cloned()
            .collect()
    }

    /// Returns the number of diagnostics with the given code.
    #[must_use]
    pub fn count(&self, code: &str) -> usize {
        self.entries()
            .iter()
            .filter(|diagnostic| diagnostic.code == code)
            .count()
    }

    /// Returns the recorded errors.
    #[must_use]
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.entries()
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
            .cloned()
            .collect()
    }

    /// Discards everything recorded so far.
    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.entries().push(diagnostic);
    }
}
