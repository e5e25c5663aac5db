//! Plugins and responders.
//!
//! A plugin contributes a configuration namespace named after itself, a set
//! of actions, and optionally responders. Responders turn a conversation into
//! new messages and get their own namespace under `responders.<name>`.
//!
//! Plugin discovery is left to the embedding application: plugins are handed
//! to the core as trait objects, either loaded directly or made available for
//! documents to load with `% prapti.plugins.load <name>`.
//!
//! - Capability flags, contexts and errors in [`domain`]
//! - The plugin and responder traits in [`ports`]
//! - Loading and response generation in [`services`]
//! - Plugins shipped with the core in [`builtin`]

pub mod builtin;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
