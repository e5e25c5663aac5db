//! Plugin and responder ports.
//!
//! Plugins are implemented outside the core. They contribute a configuration
//! namespace, actions and responders.

use std::sync::Arc;

use crate::action::domain::{Action, ActionError};
use crate::config::domain::ConfigSection;
use crate::message::domain::Message;
use crate::plugin::domain::{PluginCapabilities, ResponderContext};

/// A unit of extension loaded into a run.
///
/// The plugin name doubles as its configuration namespace, so it may be
/// dotted (e.g. `prapti.test.test_responder`).
pub trait Plugin: Send + Sync {
    /// Returns the plugin name.
    fn name(&self) -> &str;

    /// Returns the plugin version.
    fn version(&self) -> &str;

    /// Returns a one-line description.
    fn description(&self) -> &str;

    /// Returns what the plugin contributes.
    fn capabilities(&self) -> PluginCapabilities;

    /// Builds the plugin's configuration section, if it has one.
    ///
    /// Late-bound references are declared on the returned section.
    fn construct_configuration(&self) -> Option<Box<dyn ConfigSection>> {
        None
    }

    /// Builds the plugin's actions.
    ///
    /// Only consulted when [`PluginCapabilities::provides_actions`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] when an action cannot be constructed.
    fn actions(&self) -> Result<Vec<Action>, ActionError> {
        Ok(Vec::new())
    }

    /// Builds a new responder.
    ///
    /// Only consulted when [`PluginCapabilities::provides_responder`] is set.
    fn construct_responder(&self) -> Option<Arc<dyn Responder>> {
        None
    }
}

/// Produces new messages from a conversation.
pub trait Responder: Send + Sync {
    /// Builds the responder's configuration section, if it has one.
    fn construct_configuration(&self) -> Option<Box<dyn ConfigSection>> {
        None
    }

    /// Generates responses to `input`, the enabled messages of the document.
    fn generate_responses(
        &self,
        input: &[Message],
        context: &mut ResponderContext<'_>,
    ) -> Vec<Message>;
}
