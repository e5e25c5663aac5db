//! Actions: named operations that plugins expose to documents.
//!
//! A command such as `% prapti.test.test_responder.echo hello` invokes an
//! action. Actions are registered under a qualified name (`namespace.name`)
//! and can be invoked either by that name or by the bare final segment, as
//! long as the bare name is unambiguous.
//!
//! - Domain types and the registry in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
