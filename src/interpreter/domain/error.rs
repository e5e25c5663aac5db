//! Errors for a single command.

use thiserror::Error;

use super::CommandParseError;
use crate::action::domain::DispatchError;
use crate::config::domain::ConfigError;
use crate::diagnostics::codes;

/// Why a command had no effect.
///
/// The interpreter never returns these to its caller; each one becomes a
/// single diagnostic at the command's location.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The text does not match the command grammar.
    #[error(transparent)]
    Parse(#[from] CommandParseError),

    /// An assignment has no right-hand side.
    #[error("skipping configuration assignment with no right-hand-side '{0}'")]
    EmptyAssignment(String),

    /// The assignment was rejected by the configuration tree.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The action could not be selected.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl CommandError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Parse(error) => error.code(),
            Self::EmptyAssignment(_) => codes::EMPTY_ASSIGNMENT,
            Self::Config(error) => error.code(),
            Self::Dispatch(error) => error.code(),
        }
    }
}
