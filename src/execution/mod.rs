//! Run-scoped execution state and run preparation.
//!
//! An [`domain::ExecutionState`] holds everything a single run over one input
//! document touches: the configuration tree, the action registry, loaded
//! plugins and responders, the message sequence and the responses.
//!
//! - Domain types in [`domain`]
//! - The configuration document loader port in [`ports`]
//! - Loader implementations in [`adapters`]
//! - Configuration directory discovery in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
