//! Command items and their interpretation results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Message, SourceLocation};

/// The value produced by interpreting a command.
///
/// Assignments never produce output. Actions may return a plain value or a
/// newly synthesised message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "output", rename_all = "snake_case")]
pub enum CommandOutput {
    /// A plain value, such as a string or a number.
    Value(Value),
    /// A message to be inserted into the conversation.
    Message(Message),
}

impl CommandOutput {
    /// Creates a string-valued output.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Value(Value::String(text.into()))
    }

    /// Returns the plain value, if this output is one.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Message(_) => None,
        }
    }

    /// Returns the message, if this output is one.
    #[must_use]
    pub const fn as_message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            Self::Value(_) => None,
        }
    }
}

/// One interpretable line within a message.
///
/// The text excludes the command marker. The result slot starts empty and is
/// written only by the interpreter, once per interpretation pass.
///
/// # Examples
///
/// ```
/// use prapti::message::domain::{Command, SourceLocation};
///
/// let command = Command::new("!prapti.test.test_responder.fire", SourceLocation::unknown());
/// assert!(command.is_enabled());
/// assert!(command.result().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    text: String,
    is_enabled: bool,
    source_loc: SourceLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<CommandOutput>,
}

impl Command {
    /// Creates an enabled command with an empty result slot.
    #[must_use]
    pub fn new(text: impl Into<String>, source_loc: SourceLocation) -> Self {
        Self {
            text: text.into(),
            is_enabled: true,
            source_loc,
            result: None,
        }
    }

    /// Marks the command as disabled (e.g. commented out in the document).
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    /// Returns the raw command text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` when the interpreter should visit this command.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Returns where the command was written.
    #[must_use]
    pub const fn source_loc(&self) -> &SourceLocation {
        &self.source_loc
    }

    /// Returns the output of the most recent interpretation pass.
    #[must_use]
    pub const fn result(&self) -> Option<&CommandOutput> {
        self.result.as_ref()
    }

    pub(crate) fn set_result(&mut self, result: Option<CommandOutput>) {
        self.result = result;
    }
}
