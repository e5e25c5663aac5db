//! A responder plugin for exercising the core in tests.
//!
//! The responder never contacts a backend. It records the configurations it
//! sees, after late-bound references are applied, in `state.test_exfil` and
//! answers every conversation with `Test!`.

use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::action::domain::{Action, ActionContext, ActionError};
use crate::config::domain::{
    ConfigSection, Configuration, FieldTable, TypedSection, VarBinding, VarRef,
};
use crate::diagnostics::DiagnosticsSinkExt;
use crate::message::domain::{CommandOutput, Message};
use crate::plugin::domain::{PluginCapabilities, ResponderContext};
use crate::plugin::ports::{Plugin, Responder};

/// Name and configuration namespace of the plugin.
pub const PLUGIN_NAME: &str = "prapti.test.test_responder";

/// `test_exfil` key of the resolved plugin configuration.
pub const RESOLVED_PLUGIN_CONFIG: &str = "test_responder_resolved_plugin_config";

/// `test_exfil` key of the resolved responder configuration.
pub const RESOLVED_RESPONDER_CONFIG: &str = "test_responder_resolved_responder_config";

/// `test_exfil` key written by the `fire` action.
pub const FIRED: &str = "test_responder_fired";

/// Plugin-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResponderPluginConfiguration {
    /// An integer setting.
    pub an_int: i64,
    /// A string setting.
    pub a_string: String,
}

impl Default for TestResponderPluginConfiguration {
    fn default() -> Self {
        Self {
            an_int: 0,
            a_string: "test".to_owned(),
        }
    }
}

impl Configuration for TestResponderPluginConfiguration {
    fn fields() -> FieldTable<Self> {
        FieldTable::<Self>::new()
            .field("an_int", |config| &config.an_int, |config| &mut config.an_int)
            .field("a_string", |config| &config.a_string, |config| &mut config.a_string)
    }
}

/// Responder-level settings, one field of each supported type.
///
/// `model`, `temperature` and `n` are bound to the core settings of the same
/// name. `temperature` is an integer bound to a float, so resolving it
/// goes through value conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResponderConfiguration {
    /// A boolean setting.
    pub a_bool: bool,
    /// An integer setting.
    pub an_int: i64,
    /// A float setting.
    pub a_float: f64,
    /// A string setting.
    pub a_string: String,
    /// A list setting.
    pub a_list_of_strings: Vec<String>,
    /// Bound to `prapti.temperature`.
    pub temperature: i64,
    /// Bound to `prapti.model`.
    pub model: String,
    /// Bound to `prapti.n`.
    pub n: i64,
}

impl Default for TestResponderConfiguration {
    fn default() -> Self {
        Self {
            a_bool: false,
            an_int: 0,
            a_float: 0.0,
            a_string: "test".to_owned(),
            a_list_of_strings: Vec::new(),
            temperature: 1,
            model: "test".to_owned(),
            n: 1,
        }
    }
}

impl Configuration for TestResponderConfiguration {
    fn fields() -> FieldTable<Self> {
        FieldTable::<Self>::new()
            .field("a_bool", |config| &config.a_bool, |config| &mut config.a_bool)
            .field("an_int", |config| &config.an_int, |config| &mut config.an_int)
            .field("a_float", |config| &config.a_float, |config| &mut config.a_float)
            .field("a_string", |config| &config.a_string, |config| &mut config.a_string)
            .field(
                "a_list_of_strings",
                |config| &config.a_list_of_strings,
                |config| &mut config.a_list_of_strings,
            )
            .field(
                "temperature",
                |config| &config.temperature,
                |config| &mut config.temperature,
            )
            .field("model", |config| &config.model, |config| &mut config.model)
            .field("n", |config| &config.n, |config| &mut config.n)
    }
}

/// The `prapti.test.test_responder` plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestResponderPlugin;

impl Plugin for TestResponderPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn version(&self) -> &str {
        "0.0.1"
    }

    fn description(&self) -> &str {
        "Responder used to test Prapti"
    }

    fn capabilities(&self) -> PluginCapabilities {
        PluginCapabilities::ACTIONS.union(PluginCapabilities::RESPONDER)
    }

    fn construct_configuration(&self) -> Option<Box<dyn ConfigSection>> {
        Some(TypedSection::new(TestResponderPluginConfiguration::default()).boxed())
    }

    fn actions(&self) -> Result<Vec<Action>, ActionError> {
        Ok(vec![
            Action::new(format!("{PLUGIN_NAME}.echo"), echo)?,
            Action::new(format!("{PLUGIN_NAME}.fire"), fire)?.exclamation_only(),
        ])
    }

    fn construct_responder(&self) -> Option<Arc<dyn Responder>> {
        Some(Arc::new(TestResponder))
    }
}

/// The responder constructed by [`TestResponderPlugin`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TestResponder;

impl Responder for TestResponder {
    fn construct_configuration(&self) -> Option<Box<dyn ConfigSection>> {
        Some(
            TypedSection::new(TestResponderConfiguration::default())
                .with_var_bindings([
                    VarBinding::new("model", VarRef::new("prapti.model")),
                    VarBinding::new("temperature", VarRef::new("prapti.temperature")),
                    VarBinding::new("n", VarRef::new("prapti.n")),
                ])
                .boxed(),
        )
    }

    fn generate_responses(
        &self,
        input: &[Message],
        context: &mut ResponderContext<'_>,
    ) -> Vec<Message> {
        let plugin_config = context.plugin_config::<TestResponderPluginConfiguration>();
        record(context, RESOLVED_PLUGIN_CONFIG, plugin_config.as_ref());
        let responder_config = context.responder_config::<TestResponderConfiguration>();
        record(context, RESOLVED_RESPONDER_CONFIG, responder_config.as_ref());
        tracing::debug!(
            responder = context.responder_name(),
            messages = input.len(),
            "test responder answering"
        );
        vec![Message::text_message("assistant", "Test!")]
    }
}

fn record<C: Serialize>(context: &mut ResponderContext<'_>, key: &str, config: Option<&C>) {
    let Some(resolved) = config else {
        return;
    };
    match serde_json::to_value(resolved) {
        Ok(value) => {
            context.state_mut().test_exfil.insert(key.to_owned(), value);
        }
        Err(error) => context.log().warning(
            "test-exfil-serialisation",
            format!("couldn't record '{key}': {error}"),
            None,
        ),
    }
}

fn echo(_name: &str, raw_args: &str, _context: &mut ActionContext<'_>) -> Option<CommandOutput> {
    Some(CommandOutput::text(raw_args))
}

fn fire(_name: &str, raw_args: &str, context: &mut ActionContext<'_>) -> Option<CommandOutput> {
    let an_int = context
        .plugin_config::<TestResponderPluginConfiguration>()
        .map_or(0, |config| config.an_int);
    context
        .state_mut()
        .test_exfil
        .insert(FIRED.to_owned(), json!({ "args": raw_args, "an_int": an_int }));
    Some(CommandOutput::Message(Message::text_message(
        "assistant",
        "Fired!",
    )))
}
