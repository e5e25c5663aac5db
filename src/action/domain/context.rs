//! Per-invocation context handed to actions.

use std::fmt;

use crate::config::domain::{Configuration, RootConfiguration};
use crate::diagnostics::DiagnosticsSink;
use crate::execution::domain::ExecutionState;
use crate::message::domain::SourceLocation;

/// What an action can see and change while it runs.
///
/// The context borrows the execution state mutably for the duration of the
/// call, so an action may assign configuration, load plugins or select a
/// responder.
pub struct ActionContext<'a> {
    state: &'a mut ExecutionState,
    plugin_config: Option<String>,
    source_loc: SourceLocation,
}

impl<'a> ActionContext<'a> {
    /// Creates a context for one invocation.
    #[must_use]
    pub const fn new(
        state: &'a mut ExecutionState,
        plugin_config: Option<String>,
        source_loc: SourceLocation,
    ) -> Self {
        Self {
            state,
            plugin_config,
            source_loc,
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

    /// Returns where the invoking command was written.
    #[must_use]
    pub const fn source_loc(&self) -> &SourceLocation {
        &self.source_loc
    }

    /// Returns the run's diagnostics sink.
    #[must_use]
    pub fn log(&self) -> &dyn DiagnosticsSink {
        self.state.log()
    }

    /// Returns the namespace of the plugin configuration bound to the action.
    #[must_use]
    pub fn plugin_config_namespace(&self) -> Option<&str> {
        self.plugin_config.as_deref()
    }

    /// Returns the bound plugin configuration with late-bound references
    /// applied.
    ///
    /// Returns `None` when the action has no plugin configuration or the
    /// namespace holds a different record type.
    #[must_use]
    pub fn plugin_config<C: Configuration>(&self) -> Option<C> {
        let namespace = self.plugin_config.as_deref()?;
        self.state.root_config.resolve(namespace, self.state.log())
    }
}

impl fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("run_id", &self.state.run_id())
            .field("plugin_config", &self.plugin_config)
            .field("source_loc", &self.source_loc)
            .finish_non_exhaustive()
    }
}
