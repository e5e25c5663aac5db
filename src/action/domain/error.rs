//! Error types for action registration and dispatch.

use thiserror::Error;

use crate::diagnostics::codes;

/// Errors raised while registering actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The qualified name is malformed.
    #[error("invalid action name '{name}': {reason}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An action with the same qualified name is already registered.
    #[error("action '{0}' is already registered")]
    Duplicate(String),
}

impl ActionError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        codes::INVALID_ACTION
    }
}

/// Reasons an action invocation did not run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No action matches the name.
    #[error("couldn't run action '{0}'. action not found.")]
    NotFound(String),

    /// Several actions match the name.
    #[error(
        "didn't run action '{name}'. action name is ambiguous, did you mean: {}",
        join_alternatives(.alternatives)
    )]
    Ambiguous {
        /// The name as written.
        name: String,
        /// Qualified names of all matches, in registry order.
        alternatives: Vec<String>,
    },

    /// The action requires `!` but was written without it.
    #[error("didn't run action '{0}'. action is !-only but written without a '!'")]
    ExclamationRequired(String),
}

impl DispatchError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => codes::ACTION_NOT_FOUND,
            Self::Ambiguous { .. } => codes::AMBIGUOUS_ACTION_NAME,
            Self::ExclamationRequired(_) => codes::EXCLAMATION_REQUIRED,
        }
    }
}

/// Joins names as `a, b or c`.
fn join_alternatives(alternatives: &[String]) -> String {
    match alternatives {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}
