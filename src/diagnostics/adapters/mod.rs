//! Diagnostics sink implementations.
//!
//! [`TracingDiagnostics`] forwards every diagnostic to `tracing`;
//! [`RecordingDiagnostics`] keeps them for later inspection.

mod memory;
mod tracing_sink;

pub use memory::RecordingDiagnostics;
pub use tracing_sink::TracingDiagnostics;
