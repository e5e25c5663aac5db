//! Registered responders and the context they run in.

use std::fmt;
use std::sync::Arc;

use crate::config::domain::{Configuration, RESPONDERS_NAMESPACE, RootConfiguration};
use crate::diagnostics::DiagnosticsSink;
use crate::execution::domain::ExecutionState;
use crate::plugin::ports::Responder;

/// Returns the configuration namespace of the responder called `name`.
#[must_use]
pub fn responder_namespace(name: &str) -> String {
    format!("{RESPONDERS_NAMESPACE}.{name}")
}

/// A responder constructed by a plugin and stored under a name.
#[derive(Clone)]
pub struct RegisteredResponder {
    name: String,
    plugin_name: String,
    responder: Arc<dyn Responder>,
}

impl RegisteredResponder {
    /// Creates a registration.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        plugin_name: impl Into<String>,
        responder: Arc<dyn Responder>,
    ) -> Self {
        Self {
            name: name.into(),
            plugin_name: plugin_name.into(),
            responder,
        }
    }

    /// Returns the responder name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the plugin that constructed the responder.
    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// Returns the responder.
    #[must_use]
    pub fn responder(&self) -> Arc<dyn Responder> {
        Arc::clone(&self.responder)
    }
}

impl fmt::Debug for RegisteredResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredResponder")
            .field("name", &self.name)
            .field("plugin_name", &self.plugin_name)
            .finish_non_exhaustive()
    }
}

/// What a responder can see and change while generating responses.
pub struct ResponderContext<'a> {
    state: &'a mut ExecutionState,
    plugin_name: String,
    responder_name: String,
}

impl<'a> ResponderContext<'a> {
    /// Creates a context for one generation call.
    #[must_use]
    pub const fn new(
        state: &'a mut ExecutionState,
        plugin_name: String,
        responder_name: String,
    ) -> Self {
        Self {
            state,
            plugin_name,
            responder_name,
        }
    }

    /// Returns the execution state.
    #[must_use]
    pub const fn state(&self) -> &ExecutionState {
        &*self.state
    }

    /// Returns the execution state for modification.
    pub const fn state_mut(&mut self) -> &mut ExecutionState {
        &mut *self.state
    }

    /// Returns the configuration tree.
    #[must_use]
    pub const fn root_config(&self) -> &RootConfiguration {
        &self.state.root_config
    }

    /// Returns the run's diagnostics sink.
    #[must_use]
    pub fn log(&self) -> &dyn DiagnosticsSink {
        self.state.log()
    }

    /// Returns the name of the plugin that constructed the responder.
    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// Returns the responder name.
    #[must_use]
    pub fn responder_name(&self) -> &str {
        &self.responder_name
    }

    /// Returns the plugin configuration with late-bound references applied.
    #[must_use]
    pub fn plugin_config<C: Configuration>(&self) -> Option<C> {
        self.state
            .root_config
            .resolve(&self.plugin_name, self.state.log())
    }

    /// Returns the responder configuration with late-bound references
    /// applied.
    #[must_use]
    pub fn responder_config<C: Configuration>(&self) -> Option<C> {
        self.state
            .root_config
            .resolve(&responder_namespace(&self.responder_name), self.state.log())
    }
}

impl fmt::Debug for ResponderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponderContext")
            .field("run_id", &self.state.run_id())
            .field("plugin_name", &self.plugin_name)
            .field("responder_name", &self.responder_name)
            .finish_non_exhaustive()
    }
}
