//! Conversation messages and the commands embedded in them.
//!
//! A document is parsed (elsewhere) into an ordered sequence of
//! [`domain::Message`] values. Each message carries plain text segments and
//! [`domain::Command`] items in document order. The interpreter reads the
//! commands and writes each command's result back into its result slot; text
//! segments are never touched.
//!
//! # Example
//!
//! ```
//! use prapti::message::domain::{Command, ContentItem, Message, SourceLocation};
//!
//! let location = SourceLocation::new("chat.md").with_position(3, 1);
//! let message = Message::new(
//!     "user",
//!     vec![
//!         ContentItem::text("Tell me a story."),
//!         ContentItem::Command(Command::new("prapti.temperature = 0.5", location)),
//!     ],
//! );
//!
//! assert_eq!(message.commands().count(), 1);
//! ```

pub mod domain;

#[cfg(test)]
mod tests;
