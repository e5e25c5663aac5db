//! Command interpretation.
//!
//! The interpreter walks a message sequence in document order. Each enabled
//! command is parsed and then either assigned into the configuration tree or
//! dispatched to an action. Nothing is reordered or batched: a command sees
//! the effects of every command before it.
//!
//! - The command grammar and config-root detection in [`domain`]
//! - The interpretation loop in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
