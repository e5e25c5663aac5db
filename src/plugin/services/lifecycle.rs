//! Loading plugins and running responders.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::action::domain::ActionError;
use crate::config::domain::ConfigError;
use crate::diagnostics::DiagnosticsSinkExt;
use crate::execution::domain::ExecutionState;
use crate::message::domain::Message;
use crate::plugin::domain::{
    PluginError, RegisteredResponder, ResponderContext, responder_namespace,
};
use crate::plugin::ports::Plugin;

/// Loads a plugin into a run.
///
/// Registers the plugin's configuration under its name, registers its
/// actions bound to that configuration, and records the plugin as loaded.
/// Everything is checked before anything is registered, so a failed load
/// leaves the state unchanged.
///
/// # Errors
///
/// Returns [`PluginError::AlreadyLoaded`] when a plugin with the same name is
/// loaded, and [`PluginError::Config`] or [`PluginError::Action`] when its
/// namespace or one of its actions clashes with existing registrations.
pub fn load_plugin(state: &mut ExecutionState, plugin: Arc<dyn Plugin>) -> Result<(), PluginError> {
    let name = plugin.name().to_owned();
    if state.plugin(&name).is_some() {
        return Err(PluginError::AlreadyLoaded(name));
    }

    let section = plugin.construct_configuration();
    if section.is_some() && state.root_config.contains_namespace(&name) {
        return Err(ConfigError::DuplicateNamespace(name).into());
    }

    let actions = if plugin.capabilities().provides_actions() {
        plugin.actions()?
    } else {
        Vec::new()
    };
    let mut seen = BTreeSet::new();
    for action in &actions {
        let qualified_name = action.qualified_name();
        let taken = state
            .actions()
            .names()
            .any(|registered| registered == qualified_name);
        if taken || !seen.insert(qualified_name) {
            return Err(ActionError::Duplicate(qualified_name.to_owned()).into());
        }
    }

    let has_config = section.is_some();
    if let Some(config) = section {
        state.root_config.register_section(name.clone(), config)?;
    }
    for action in actions {
        let bound = if has_config {
            action.with_plugin_config(name.clone())
        } else {
            action
        };
        state.actions_mut().add_action(bound)?;
    }
    tracing::info!(
        run_id = %state.run_id(),
        plugin = %name,
        version = plugin.version(),
        "loaded plugin"
    );
    state.insert_plugin(plugin);
    Ok(())
}

/// Loads an available plugin by name.
///
/// # Errors
///
/// Returns [`PluginError::UnknownPlugin`] when no plugin with that name has
/// been made available, otherwise as for [`load_plugin`].
pub fn load_available_plugin(state: &mut ExecutionState, name: &str) -> Result<(), PluginError> {
    let plugin = state
        .available_plugin(name)
        .ok_or_else(|| PluginError::UnknownPlugin(name.to_owned()))?;
    load_plugin(state, plugin)
}

/// Constructs a responder from a loaded plugin, registers its configuration
/// under `responders.<responder_name>` and selects it.
///
/// # Errors
///
/// Returns [`PluginError`] when the plugin is not loaded, does not provide
/// responders, or the responder name is taken.
pub fn create_responder(
    state: &mut ExecutionState,
    responder_name: &str,
    plugin_name: &str,
) -> Result<(), PluginError> {
    let plugin = state
        .plugin(plugin_name)
        .ok_or_else(|| PluginError::UnknownPlugin(plugin_name.to_owned()))?;
    if state.responder(responder_name).is_some() {
        return Err(PluginError::DuplicateResponder(responder_name.to_owned()));
    }
    let responder = plugin
        .capabilities()
        .provides_responder()
        .then(|| plugin.construct_responder())
        .flatten()
        .ok_or_else(|| PluginError::ResponderNotSupported(plugin_name.to_owned()))?;

    if let Some(config) = responder.construct_configuration() {
        state
            .root_config
            .register_section(responder_namespace(responder_name), config)?;
    }
    state.insert_responder(RegisteredResponder::new(
        responder_name,
        plugin_name,
        responder,
    ));
    state.select_responder(responder_name);
    tracing::info!(
        run_id = %state.run_id(),
        responder = responder_name,
        plugin = plugin_name,
        "created responder"
    );
    Ok(())
}

/// Makes an existing responder the selected one.
///
/// # Errors
///
/// Returns [`PluginError::UnknownResponder`] when no responder has that
/// name.
pub fn select_responder(state: &mut ExecutionState, responder_name: &str) -> Result<(), PluginError> {
    if state.responder(responder_name).is_none() {
        return Err(PluginError::UnknownResponder(responder_name.to_owned()));
    }
    state.select_responder(responder_name);
    Ok(())
}

/// Runs the selected responder over the enabled messages of the state's
/// message sequence and appends its output to `state.responses`.
///
/// Returns the number of responses generated. Without a selected responder
/// the condition is reported and nothing is generated.
pub fn generate_responses(state: &mut ExecutionState) -> usize {
    let Some(registered) = state
        .selected_responder()
        .and_then(|name| state.responder(name))
        .cloned()
    else {
        let error = PluginError::NoResponderSelected;
        state.log().error(error.code(), error.to_string(), None);
        return 0;
    };

    let input: Vec<Message> = state
        .message_sequence
        .iter()
        .filter(|message| message.is_enabled())
        .cloned()
        .collect();
    let responder = registered.responder();
    let mut context = ResponderContext::new(
        state,
        registered.plugin_name().to_owned(),
        registered.name().to_owned(),
    );
    let responses = responder.generate_responses(&input, &mut context);
    let count = responses.len();
    tracing::debug!(
        run_id = %state.run_id(),
        responder = registered.name(),
        count,
        "generated responses"
    );
    state.responses.extend(responses);
    count
}
