//! Detection of `config_root = true` without interpretation.

use crate::message::domain::{Command, Message};

/// Returns `true` when an enabled command in an enabled message assigns
/// `true` to `config_root` or `prapti.config_root`.
///
/// The scan is purely textual: no command is interpreted and nothing is
/// modified. It is used while deciding which in-tree configuration documents
/// apply, before any configuration exists.
///
/// # Examples
///
/// ```
/// use prapti::interpreter::domain::is_config_root;
/// use prapti::message::domain::{Command, ContentItem, Message, SourceLocation};
///
/// let document = vec![Message::new(
///     "_prapti",
///     vec![ContentItem::Command(Command::new(
///         "prapti.config_root = true",
///         SourceLocation::unknown(),
///     ))],
/// )];
/// assert!(is_config_root(&document));
/// assert!(!is_config_root(&[]));
/// ```
#[must_use]
pub fn is_config_root(messages: &[Message]) -> bool {
    messages
        .iter()
        .filter(|message| message.is_enabled())
        .flat_map(Message::commands)
        .filter(|command| command.is_enabled())
        .map(Command::text)
        .any(declares_config_root)
}

fn declares_config_root(text: &str) -> bool {
    let start = text.trim_start();
    start
        .strip_prefix("prapti.")
        .unwrap_or(start)
        .strip_prefix("config_root")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
        .map(str::trim_start)
        .is_some_and(|value| value.starts_with("true"))
}
