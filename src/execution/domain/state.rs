//! The run-scoped execution state.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{RunId, RunOptions};
use crate::action::domain::ActionRegistry;
use crate::config::domain::RootConfiguration;
use crate::diagnostics::DiagnosticsSink;
use crate::message::domain::Message;
use crate::plugin::domain::RegisteredResponder;
use crate::plugin::ports::Plugin;

/// Everything one run over one input document reads and writes.
///
/// The configuration tree and message lists are plain data owned by the
/// state. Actions, plugins and responders are reached through accessors so
/// that their registration rules are enforced in one place.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use prapti::diagnostics::adapters::RecordingDiagnostics;
/// use prapti::execution::domain::{ExecutionState, RunOptions};
///
/// let state = ExecutionState::new(
///     RunOptions::new("notes/chat.md"),
///     Arc::new(RecordingDiagnostics::new()),
/// );
///
/// assert_eq!(state.input_file_path().as_str(), "notes/chat.md");
/// assert!(state.actions().is_empty());
/// assert!(state.selected_responder().is_none());
/// ```
pub struct ExecutionState {
    run_id: RunId,
    log: Arc<dyn DiagnosticsSink>,
    options: RunOptions,
    /// The configuration tree for this run.
    pub root_config: RootConfiguration,
    /// The parsed input document.
    pub message_sequence: Vec<Message>,
    /// Messages produced by responders, in generation order.
    pub responses: Vec<Message>,
    /// Values recorded by test plugins for inspection by tests.
    pub test_exfil: BTreeMap<String, Value>,
    actions: ActionRegistry,
    available_plugins: BTreeMap<String, Arc<dyn Plugin>>,
    plugins: BTreeMap<String, Arc<dyn Plugin>>,
    responders: BTreeMap<String, RegisteredResponder>,
    selected_responder: Option<String>,
}

impl ExecutionState {
    /// Creates the state for a new run with a fresh [`RunId`].
    #[must_use]
    pub fn new(options: RunOptions, log: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            run_id: RunId::new(),
            log,
            options,
            root_config: RootConfiguration::new(),
            message_sequence: Vec::new(),
            responses: Vec::new(),
            test_exfil: BTreeMap::new(),
            actions: ActionRegistry::new(),
            available_plugins: BTreeMap::new(),
            plugins: BTreeMap::new(),
            responders: BTreeMap::new(),
            selected_responder: None,
        }
    }

    /// Replaces the message sequence.
    #[must_use]
    pub fn with_message_sequence(mut self, messages: Vec<Message>) -> Self {
        self.message_sequence = messages;
        self
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Returns the diagnostics sink.
    #[must_use]
    pub fn log(&self) -> &dyn DiagnosticsSink {
        self.log.as_ref()
    }

    /// Returns a shared handle to the diagnostics sink.
    #[must_use]
    pub fn shared_log(&self) -> Arc<dyn DiagnosticsSink> {
        Arc::clone(&self.log)
    }

    /// Returns the options the run was started with.
    #[must_use]
    pub const fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Returns the path of the input document.
    #[must_use]
    pub fn input_file_path(&self) -> &Utf8Path {
        &self.options.input_file_path
    }

    /// Returns the per-user configuration directory, if any.
    #[must_use]
    pub fn user_config_dir(&self) -> Option<&Utf8Path> {
        self.options.user_config_dir.as_deref()
    }

    /// Returns the in-tree configuration directories, nearest first.
    #[must_use]
    pub fn config_dirs(&self) -> &[Utf8PathBuf] {
        &self.options.config_dirs
    }

    /// Records the in-tree configuration directories found for this run.
    pub fn set_config_dirs(&mut self, dirs: Vec<Utf8PathBuf>) {
        self.options.config_dirs = dirs;
    }

    /// Returns the action registry.
    #[must_use]
    pub const fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Returns the action registry for registration.
    pub const fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }

    /// Offers a plugin for loading by name, e.g. from a document.
    pub fn make_available(&mut self, plugin: Arc<dyn Plugin>) {
        self.available_plugins
            .insert(plugin.name().to_owned(), plugin);
    }

    /// Returns an available plugin by name.
    #[must_use]
    pub fn available_plugin(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.available_plugins.get(name).map(Arc::clone)
    }

    /// Returns a loaded plugin by name.
    #[must_use]
    pub fn plugin(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(name).map(Arc::clone)
    }

    /// Iterates over the names of loaded plugins in sorted order.
    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    /// Returns a responder by name.
    #[must_use]
    pub fn responder(&self, name: &str) -> Option<&RegisteredResponder> {
        self.responders.get(name)
    }

    /// Returns the name of the selected responder, if any.
    #[must_use]
    pub fn selected_responder(&self) -> Option<&str> {
        self.selected_responder.as_deref()
    }

    pub(crate) fn insert_plugin(&mut self, plugin: Arc<dyn Plugin>) {
        self.plugins.insert(plugin.name().to_owned(), plugin);
    }

    pub(crate) fn insert_responder(&mut self, responder: RegisteredResponder) {
        self.responders
            .insert(responder.name().to_owned(), responder);
    }

    pub(crate) fn select_responder(&mut self, name: &str) {
        self.selected_responder = Some(name.to_owned());
    }
}

impl fmt::Debug for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionState")
            .field("run_id", &self.run_id)
            .field("options", &self.options)
            .field("root_config", &self.root_config)
            .field("message_sequence", &self.message_sequence.len())
            .field("responses", &self.responses.len())
            .field("actions", &self.actions)
            .field(
                "available_plugins",
                &self.available_plugins.keys().collect::<Vec<_>>(),
            )
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .field("selected_responder", &self.selected_responder)
            .finish_non_exhaustive()
    }
}
