//! Error types for plugin loading and responder management.

use thiserror::Error;

use crate::action::domain::ActionError;
use crate::config::domain::ConfigError;
use crate::diagnostics::codes;

/// Errors raised while loading plugins or managing responders.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PluginError {
    /// A plugin with this name is already loaded.
    #[error("plugin '{0}' is already loaded")]
    AlreadyLoaded(String),

    /// No plugin with this name is loaded or available.
    #[error("plugin '{0}' not found")]
    UnknownPlugin(String),

    /// The plugin does not construct responders.
    #[error("plugin '{0}' does not provide a responder")]
    ResponderNotSupported(String),

    /// A responder with this name already exists.
    #[error("responder '{0}' already exists")]
    DuplicateResponder(String),

    /// No responder with the given name exists.
    #[error("responder '{0}' not found")]
    UnknownResponder(String),

    /// Responses were requested but no responder is selected.
    #[error("no responder selected")]
    NoResponderSelected,

    /// The plugin's configuration could not be registered.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One of the plugin's actions could not be registered.
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl PluginError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AlreadyLoaded(_) => codes::PLUGIN_ALREADY_LOADED,
            Self::UnknownPlugin(_) => codes::UNKNOWN_PLUGIN,
            Self::ResponderNotSupported(_) => codes::RESPONDER_NOT_SUPPORTED,
            Self::DuplicateResponder(_) => codes::DUPLICATE_RESPONDER,
            Self::UnknownResponder(_) => codes::UNKNOWN_RESPONDER,
            Self::NoResponderSelected => codes::NO_RESPONDER_SELECTED,
            Self::Config(error) => error.code(),
            Self::Action(error) => error.code(),
        }
    }
}
