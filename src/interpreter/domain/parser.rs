//! Command syntax.
//!
//! After the command marker a command is either
//!
//! ```text
//! [!] name = value
//! [!] name [arguments]
//! ```
//!
//! where `name` is made of word characters and `-_./\`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::codes;

/// Returns `true` for characters allowed in field and action names.
#[must_use]
pub fn is_name_char(character: char) -> bool {
    character.is_alphanumeric() || matches!(character, '_' | '-' | '.' | '/' | '\\')
}

/// Command text that does not match the command grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// No name follows the optional `!`.
    #[error("couldn't interpret command '{0}'")]
    MissingName(String),

    /// The name is followed by something other than `=`, whitespace or the
    /// end of the command.
    #[error("couldn't interpret command '{text}': unexpected '{found}' after '{name}'")]
    UnexpectedCharacter {
        /// The command text.
        text: String,
        /// The name as far as it was read.
        name: String,
        /// The offending character.
        found: char,
    },
}

impl CommandParseError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        codes::UNKNOWN_COMMAND
    }
}

/// A command split into its syntactic parts.
///
/// # Examples
///
/// ```
/// use prapti::interpreter::domain::ParsedCommand;
///
/// let assignment = ParsedCommand::parse("prapti.temperature = 0.5").expect("valid");
/// assert!(assignment.is_assignment());
/// assert_eq!(assignment.name(), "prapti.temperature");
/// assert_eq!(assignment.rhs(), "0.5");
///
/// let action = ParsedCommand::parse("!prapti.test.test_responder.fire now").expect("valid");
/// assert!(action.has_exclamation());
/// assert!(!action.is_assignment());
/// assert_eq!(action.rhs(), "now");
///
/// assert!(ParsedCommand::parse("= 5").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    has_exclamation: bool,
    name: String,
    is_assignment: bool,
    rhs: String,
}

impl ParsedCommand {
    /// Parses command text with the command marker already removed.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] when the text does not match the command
    /// grammar.
    pub fn parse(text: &str) -> Result<Self, CommandParseError> {
        let (has_exclamation, body) = text
            .strip_prefix('!')
            .map_or((false, text), |rest| (true, rest));
        let start = body.trim_start();
        let name_len = start
            .find(|character: char| !is_name_char(character))
            .unwrap_or(start.len());
        let (name, rest) = start.split_at(name_len);
        if name.is_empty() {
            return Err(CommandParseError::MissingName(text.to_owned()));
        }

        if let Some(rhs) = rest.trim_start().strip_prefix('=') {
            return Ok(Self::new(has_exclamation, name, true, rhs));
        }
        match rest.chars().next() {
            None => Ok(Self::new(has_exclamation, name, false, "")),
            Some(character) if character.is_whitespace() => {
                Ok(Self::new(has_exclamation, name, false, rest))
            }
            Some(found) => Err(CommandParseError::UnexpectedCharacter {
                text: text.to_owned(),
                name: name.to_owned(),
                found,
            }),
        }
    }

    fn new(has_exclamation: bool, name: &str, is_assignment: bool, rhs: &str) -> Self {
        Self {
            has_exclamation,
            name: name.to_owned(),
            is_assignment,
            rhs: rhs.trim().to_owned(),
        }
    }

    /// Returns `true` when the command was written with a leading `!`.
    #[must_use]
    pub const fn has_exclamation(&self) -> bool {
        self.has_exclamation
    }

    /// Returns the field or action name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` for `name = value` commands.
    #[must_use]
    pub const fn is_assignment(&self) -> bool {
        self.is_assignment
    }

    /// Returns the trimmed right-hand side or argument text.
    #[must_use]
    pub fn rhs(&self) -> &str {
        &self.rhs
    }
}
