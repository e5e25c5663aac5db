//! Actions provided by the core itself.

use crate::action::domain::{Action, ActionContext};
use crate::diagnostics::{DiagnosticsSinkExt, codes};
use crate::execution::domain::ExecutionState;
use crate::message::domain::CommandOutput;
use crate::plugin::builtin;
use crate::plugin::domain::PluginError;

use super::{create_responder, load_available_plugin, select_responder};

/// Registers the core actions and makes the built-in plugins available.
///
/// The core actions are:
///
/// - `prapti.plugins.load <plugin>` loads an available plugin;
/// - `prapti.responder.new <responder> <plugin>` creates and selects a
///   responder;
/// - `prapti.responder.select <responder>` selects an existing responder.
///
/// # Errors
///
/// Returns [`PluginError::Action`] when the core actions are already
/// registered.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use prapti::diagnostics::adapters::RecordingDiagnostics;
/// use prapti::execution::domain::{ExecutionState, RunOptions};
/// use prapti::plugin::services::install_core;
///
/// let mut state = ExecutionState::new(
///     RunOptions::new("chat.md"),
///     Arc::new(RecordingDiagnostics::new()),
/// );
/// install_core(&mut state).expect("fresh state");
///
/// assert_eq!(state.actions().lookup_action("prapti.plugins.load").len(), 1);
/// assert!(state.available_plugin("prapti.test.test_responder").is_some());
/// ```
pub fn install_core(state: &mut ExecutionState) -> Result<(), PluginError> {
    let actions = [
        Action::new("prapti.plugins.load", plugins_load)?,
        Action::new("prapti.responder.new", responder_new)?,
        Action::new("prapti.responder.select", responder_select)?,
    ];
    for action in actions {
        state.actions_mut().add_action(action)?;
    }
    for plugin in builtin::builtin_plugins() {
        state.make_available(plugin);
    }
    Ok(())
}

fn plugins_load(
    name: &str,
    raw_args: &str,
    context: &mut ActionContext<'_>,
) -> Option<CommandOutput> {
    let plugin_names: Vec<&str> = raw_args.split_whitespace().collect();
    if plugin_names.is_empty() {
        report_usage(context, name, "<plugin name>...");
    }
    for plugin_name in plugin_names {
        let outcome = load_available_plugin(context.state_mut(), plugin_name);
        report(context, outcome);
    }
    None
}

fn responder_new(
    name: &str,
    raw_args: &str,
    context: &mut ActionContext<'_>,
) -> Option<CommandOutput> {
    let mut args = raw_args.split_whitespace();
    match (args.next(), args.next(), args.next()) {
        (Some(responder_name), Some(plugin_name), None) => {
            let outcome = create_responder(context.state_mut(), responder_name, plugin_name);
            report(context, outcome);
        }
        _ => report_usage(context, name, "<responder name> <plugin name>"),
    }
    None
}

fn responder_select(
    name: &str,
    raw_args: &str,
    context: &mut ActionContext<'_>,
) -> Option<CommandOutput> {
    let mut args = raw_args.split_whitespace();
    match (args.next(), args.next()) {
        (Some(responder_name), None) => {
            let outcome = select_responder(context.state_mut(), responder_name);
            report(context, outcome);
        }
        _ => report_usage(context, name, "<responder name>"),
    }
    None
}

fn report(context: &ActionContext<'_>, outcome: Result<(), PluginError>) {
    if let Err(error) = outcome {
        context
            .log()
            .error(error.code(), error.to_string(), Some(context.source_loc()));
    }
}

fn report_usage(context: &ActionContext<'_>, name: &str, usage: &str) {
    context.log().error(
        codes::INVALID_ARGUMENTS,
        format!("usage: {name} {usage}"),
        Some(context.source_loc()),
    );
}

