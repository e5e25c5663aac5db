//! Messages: the unit of conversation in a document.

use serde::{Deserialize, Serialize};

use super::{Command, SourceLocation};

/// A single content item within a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentItem {
    /// Conversational text, inert to the interpreter.
    Text(String),
    /// A command line.
    Command(Command),
}

impl ContentItem {
    /// Creates a text item.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the command, if this item is one.
    #[must_use]
    pub const fn as_command(&self) -> Option<&Command> {
        match self {
            Self::Command(command) => Some(command),
            Self::Text(_) => None,
        }
    }
}

/// A message within a conversation document.
///
/// Roles are free text: documents commonly use `prompt`, `user`,
/// `assistant` and `completion`, and plugins may recognise others.
///
/// # Examples
///
/// ```
/// use prapti::message::domain::Message;
///
/// let message = Message::text_message("assistant", "Hello!").private();
/// assert_eq!(message.role(), "assistant");
/// assert!(message.is_private());
/// assert!(message.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    content: Vec<ContentItem>,
    is_enabled: bool,
    is_private: bool,
    #[serde(default)]
    source_loc: SourceLocation,
}

impl Message {
    /// Creates an enabled, public message.
    #[must_use]
    pub fn new(role: impl Into<String>, content: Vec<ContentItem>) -> Self {
        Self {
            role: role.into(),
            name: None,
            content,
            is_enabled: true,
            is_private: false,
            source_loc: SourceLocation::unknown(),
        }
    }

    /// Creates a message holding a single text item.
    #[must_use]
    pub fn text_message(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(role, vec![ContentItem::text(text)])
    }

    /// Sets the author name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the location of the message heading.
    #[must_use]
    pub fn with_source_loc(mut self, source_loc: SourceLocation) -> Self {
        self.source_loc = source_loc;
        self
    }

    /// Marks the message as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    /// Marks the message as private (never sent to a backend).
    #[must_use]
    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Returns the role tag.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the author name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the content items in document order.
    #[must_use]
    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }

    /// Returns `true` when the message takes part in interpretation.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Returns `true` when the message must not be sent to a backend.
    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.is_private
    }

    /// Returns the location of the message heading.
    #[must_use]
    pub const fn source_loc(&self) -> &SourceLocation {
        &self.source_loc
    }

    /// Iterates over all command items, enabled or not.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.content.iter().filter_map(ContentItem::as_command)
    }

    /// Concatenates the text items, ignoring commands.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|item| match item {
                ContentItem::Text(text) => Some(text.as_str()),
                ContentItem::Command(_) => None,
            })
            .collect()
    }

    pub(crate) fn commands_mut(&mut self) -> impl Iterator<Item = &mut Command> {
        self.content.iter_mut().filter_map(|item| match item {
            ContentItem::Command(command) => Some(command),
            ContentItem::Text(_) => None,
        })
    }
}
