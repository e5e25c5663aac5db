//! Sink that forwards diagnostics to `tracing`.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::diagnostics::{Diagnostic, DiagnosticsSink, Severity};

/// Emits each diagnostic as a `tracing` event at the matching level.
///
/// Events carry `code` and `location` fields so that structured subscribers
/// (e.g. JSON output) can filter on them. The sink also counts errors, which
/// callers use to choose an exit status.
#[derive(Debug, Default)]
pub struct TracingDiagnostics {
    error_count: AtomicUsize,
}

impl TracingDiagnostics {
    /// Creates a sink with a zero error count.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            error_count: AtomicUsize::new(0),
        }
    }

    /// Returns how many errors have been reported so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }
}

impl DiagnosticsSink for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        let location = diagnostic
            .source_loc
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let code = diagnostic.code.as_str();
        let message = diagnostic.message.as_str();
        match diagnostic.severity {
            Severity::Debug => tracing::debug!(code, location = %location, "{message}"),
            Severity::Info => tracing::info!(code, location = %location, "{message}"),
            Severity::Warning => tracing::warn!(code, location = %location, "{message}"),
            Severity::Error => {
                self.error_count.fetch_add(1, Ordering::Relaxed);
                tracing::error!(code, location = %location, "{message}");
            }
        }
    }
}
