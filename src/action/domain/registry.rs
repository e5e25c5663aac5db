//! Name-indexed action registry.

use std::collections::BTreeMap;

use super::{Action, ActionError, DispatchError};

/// All actions available to a run, keyed by qualified name.
///
/// # Examples
///
/// ```
/// use prapti::action::domain::{Action, ActionRegistry};
///
/// let mut registry = ActionRegistry::new();
/// registry
///     .add_action(Action::new("koboldcpp.text.set_stop", |_, _, _| None).expect("valid name"))
///     .expect("first registration");
///
/// assert_eq!(registry.lookup_action("set_stop").len(), 1);
/// assert_eq!(registry.lookup_action("koboldcpp.text.set_stop").len(), 1);
/// assert!(registry.lookup_action("text.set_stop").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Action>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: BTreeMap::new(),
        }
    }

    /// Registers an action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Duplicate`] when the qualified name is taken.
    pub fn add_action(&mut self, action: Action) -> Result<(), ActionError> {
        let key = action.qualified_name().to_owned();
        if self.actions.contains_key(&key) {
            return Err(ActionError::Duplicate(key));
        }
        tracing::debug!(action = %key, "registered action");
        self.actions.insert(key, action);
        Ok(())
    }

    /// Returns every action selected by `name`, by qualified or bare name.
    #[must_use]
    pub fn lookup_action(&self, name: &str) -> Vec<&Action> {
        self.actions
            .values()
            .filter(|action| action.matches(name))
            .collect()
    }

    /// Selects the unique action for an invocation and applies the
    /// exclamation policy.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when no action or several actions match, or
    /// when an exclamation-only action is invoked without `!`.
    pub fn select(&self, name: &str, has_exclamation: bool) -> Result<&Action, DispatchError> {
        match self.lookup_action(name).as_slice() {
            [] => Err(DispatchError::NotFound(name.to_owned())),
            [action] if action.is_exclamation_only() && !has_exclamation => {
                Err(DispatchError::ExclamationRequired(name.to_owned()))
            }
            [action] => Ok(*action),
            matches => Err(DispatchError::Ambiguous {
                name: name.to_owned(),
                alternatives: matches
                    .iter()
                    .map(|action| action.qualified_name().to_owned())
                    .collect(),
            }),
        }
    }

    /// Iterates over the registered qualified names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Returns the number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` when no actions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
