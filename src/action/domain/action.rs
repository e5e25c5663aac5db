//! Action definitions.

use std::fmt;
use std::sync::Arc;

use super::{ActionContext, ActionError};
use crate::interpreter::domain::is_name_char;
use crate::message::domain::CommandOutput;

/// Signature of an action implementation.
///
/// The arguments are the name the action was invoked by, the raw argument
/// text (already trimmed), and the invocation context. The return value
/// becomes the command's result.
pub type ActionFn =
    dyn Fn(&str, &str, &mut ActionContext<'_>) -> Option<CommandOutput> + Send + Sync;

/// A named, invocable operation.
///
/// # Examples
///
/// ```
/// use prapti::action::domain::Action;
/// use prapti::message::domain::CommandOutput;
///
/// let action = Action::new("prapti.test.test_responder.echo", |_, args, _| {
///     Some(CommandOutput::text(args))
/// })
/// .expect("valid name");
///
/// assert_eq!(action.namespace(), "prapti.test.test_responder");
/// assert_eq!(action.name(), "echo");
/// assert!(!action.is_exclamation_only());
/// ```
#[derive(Clone)]
pub struct Action {
    qualified_name: String,
    split_at: usize,
    exclamation_only: bool,
    plugin_config: Option<String>,
    function: Arc<ActionFn>,
}

impl Action {
    /// Creates an action registered under `qualified_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidName`] when the name has no namespace,
    /// an empty segment, or characters outside the command name grammar.
    pub fn new<F>(qualified_name: impl Into<String>, function: F) -> Result<Self, ActionError>
    where
        F: Fn(&str, &str, &mut ActionContext<'_>) -> Option<CommandOutput> + Send + Sync + 'static,
    {
        let name = qualified_name.into();
        let split_at = validate_qualified_name(&name)?;
        Ok(Self {
            qualified_name: name,
            split_at,
            exclamation_only: false,
            plugin_config: None,
            function: Arc::new(function),
        })
    }

    /// Requires the action to be written with a leading `!`.
    #[must_use]
    pub const fn exclamation_only(mut self) -> Self {
        self.exclamation_only = true;
        self
    }

    /// Binds the action to a plugin configuration namespace.
    #[must_use]
    pub fn with_plugin_config(mut self, namespace: impl Into<String>) -> Self {
        self.plugin_config = Some(namespace.into());
        self
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Returns the namespace part of the qualified name.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.qualified_name
            .get(..self.split_at)
            .unwrap_or_default()
    }

    /// Returns the bare name: the final segment of the qualified name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.qualified_name
            .get(self.split_at + 1..)
            .unwrap_or_default()
    }

    /// Returns `true` when the action only runs if written with `!`.
    #[must_use]
    pub const fn is_exclamation_only(&self) -> bool {
        self.exclamation_only
    }

    /// Returns the namespace of the bound plugin configuration, if any.
    #[must_use]
    pub fn plugin_config(&self) -> Option<&str> {
        self.plugin_config.as_deref()
    }

    /// Returns `true` when `name` selects this action.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.qualified_name == name || self.name() == name
    }

    /// Calls the action.
    pub fn invoke(
        &self,
        name: &str,
        raw_args: &str,
        context: &mut ActionContext<'_>,
    ) -> Option<CommandOutput> {
        (self.function)(name, raw_args, context)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("qualified_name", &self.qualified_name)
            .field("exclamation_only", &self.exclamation_only)
            .field("plugin_config", &self.plugin_config)
            .finish_non_exhaustive()
    }
}

fn validate_qualified_name(qualified_name: &str) -> Result<usize, ActionError> {
    let invalid = |reason: &str| ActionError::InvalidName {
        name: qualified_name.to_owned(),
        reason: reason.to_owned(),
    };

    if !qualified_name.chars().all(is_name_char) {
        return Err(invalid("names may only contain word characters and -_./\\"));
    }
    let split_at = qualified_name
        .rfind('.')
        .ok_or_else(|| invalid("expected a qualified name of the form namespace.name"))?;
    if qualified_name.split('.').any(str::is_empty) {
        return Err(invalid("name segments must not be empty"));
    }
    Ok(split_at)
}
