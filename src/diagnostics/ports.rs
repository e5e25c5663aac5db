//! Diagnostics sink port.

use super::{Diagnostic, Severity};
use crate::message::domain::SourceLocation;

/// Port for reporting diagnostics.
///
/// The sink is the only reporting channel of the interpreter. Implementations
/// must never fail or panic: a diagnostic that cannot be delivered is dropped.
pub trait DiagnosticsSink: Send + Sync {
    /// Records one diagnostic.
    fn emit(&self, diagnostic: Diagnostic);
}

/// Convenience reporting helpers for every [`DiagnosticsSink`].
pub trait DiagnosticsSinkExt: DiagnosticsSink {
    /// Reports an error.
    fn error(&self, code: &str, message: impl Into<String>, source_loc: Option<&SourceLocation>) {
        self.emit(Diagnostic::new(Severity::Error, code, message).at(source_loc));
    }

    /// Reports a warning.
    fn warning(&self, code: &str, message: impl Into<String>, source_loc: Option<&SourceLocation>) {
        self.emit(Diagnostic::new(Severity::Warning, code, message).at(source_loc));
    }

    /// Reports an informational event.
    fn info(&self, code: &str, message: impl Into<String>, source_loc: Option<&SourceLocation>) {
        self.emit(Diagnostic::new(Severity::Info, code, message).at(source_loc));
    }

    /// Reports developer-level detail.
    fn debug(&self, code: &str, message: impl Into<String>, source_loc: Option<&SourceLocation>) {
        self.emit(Diagnostic::new(Severity::Debug, code, message).at(source_loc));
    }
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSinkExt for T {}
