//! Diagnostic reporting.
//!
//! User mistakes in a document (malformed commands, unknown fields, ambiguous
//! action names) are never raised to the caller. They are reported once each
//! through a [`ports::DiagnosticsSink`] and interpretation continues.
//!
//! - Domain types in [`domain`]
//! - The sink port in [`ports`]
//! - Sink implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

pub use domain::{Diagnostic, Severity, codes};
pub use ports::{DiagnosticsSink, DiagnosticsSinkExt};
