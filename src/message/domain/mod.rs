//! Domain types for documents.
//!
//! These types are produced by an external document parser and consumed by
//! the interpreter. They carry no infrastructure dependencies.

mod command;
mod message;
mod source_location;

pub use command::{Command, CommandOutput};
pub use message::{ContentItem, Message};
pub use source_location::SourceLocation;
