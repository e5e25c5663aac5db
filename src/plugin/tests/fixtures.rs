//! Shared plugins and state for plugin tests.

use rstest::fixture;
use serde_json::Value;
use std::sync::Arc;

use crate::action::domain::{Action, ActionError};
use crate::config::domain::{ConfigSection, Configuration, FieldTable, TypedSection};
use crate::diagnostics::adapters::RecordingDiagnostics;
use crate::execution::domain::{ExecutionState, RunOptions};
use crate::message::domain::{Command, CommandOutput, ContentItem, Message, SourceLocation};
use crate::plugin::domain::PluginCapabilities;
use crate::plugin::ports::Plugin;
use crate::plugin::services::install_core;

/// A state with the core actions installed, and the recorder it reports to.
pub struct Harness {
    pub state: ExecutionState,
    pub log: Arc<RecordingDiagnostics>,
}

impl Harness {
    /// Reads one field of a record stored in `test_exfil`.
    pub fn exfil_field(&self, key: &str, field: &str) -> Option<Value> {
        self.state
            .test_exfil
            .get(key)
            .and_then(|record| record.get(field))
            .cloned()
    }
}

#[fixture]
pub fn harness() -> Harness {
    let log = Arc::new(RecordingDiagnostics::new());
    let mut state = ExecutionState::new(RunOptions::new("chat.md"), log.clone());
    install_core(&mut state).expect("core actions register once");
    Harness { state, log }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuietConfiguration {
    pub volume: i64,
}

impl Configuration for QuietConfiguration {
    fn fields() -> FieldTable<Self> {
        FieldTable::<Self>::new().field("volume", |config| &config.volume, |config| &mut config.volume)
    }
}

/// A plugin that offers an action but does not declare the capability.
#[derive(Debug, Clone, Copy)]
pub struct QuietPlugin;

impl Plugin for QuietPlugin {
    fn name(&self) -> &str {
        "quiet.plugin"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn description(&self) -> &str {
        "Configuration only"
    }

    fn capabilities(&self) -> PluginCapabilities {
        PluginCapabilities::NONE
    }

    fn construct_configuration(&self) -> Option<Box<dyn ConfigSection>> {
        Some(TypedSection::new(QuietConfiguration::default()).boxed())
    }

    fn actions(&self) -> Result<Vec<Action>, ActionError> {
        Ok(vec![Action::new("quiet.plugin.hush", |_, _, _| None)?])
    }
}

/// A plugin whose action name is already taken by the core.
#[derive(Debug, Clone, Copy)]
pub struct ClashingPlugin;

impl Plugin for ClashingPlugin {
    fn name(&self) -> &str {
        "clashing.plugin"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn description(&self) -> &str {
        "Redefines a core action"
    }

    fn capabilities(&self) -> PluginCapabilities {
        PluginCapabilities::ACTIONS
    }

    fn construct_configuration(&self) -> Option<Box<dyn ConfigSection>> {
        Some(TypedSection::new(QuietConfiguration::default()).boxed())
    }

    fn actions(&self) -> Result<Vec<Action>, ActionError> {
        Ok(vec![
            Action::new("clashing.plugin.fine", |_, _, _| None)?,
            Action::new("prapti.plugins.load", |_, _, _| None)?,
        ])
    }
}

/// A plugin that declares the same action twice.
#[derive(Debug, Clone, Copy)]
pub struct RepeatingPlugin;

impl Plugin for RepeatingPlugin {
    fn name(&self) -> &str {
        "repeating.plugin"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn description(&self) -> &str {
        "Declares one action name twice"
    }

    fn capabilities(&self) -> PluginCapabilities {
        PluginCapabilities::ACTIONS
    }

    fn construct_configuration(&self) -> Option<Box<dyn ConfigSection>> {
        Some(TypedSection::new(QuietConfiguration::default()).boxed())
    }

    fn actions(&self) -> Result<Vec<Action>, ActionError> {
        Ok(vec![
            Action::new("repeating.plugin.go", |_, _, _| None)?,
            Action::new("repeating.plugin.go", |_, _, _| None)?,
        ])
    }
}

/// Builds a message holding one command per entry, at consecutive lines.
pub fn commands(texts: &[&str]) -> Message {
    let content = texts
        .iter()
        .zip(1..)
        .map(|(text, line)| {
            ContentItem::Command(Command::new(
                *text,
                SourceLocation::new("chat.md").with_line(line),
            ))
        })
        .collect();
    Message::new("user", content)
}

/// Collects the result of every command, in document order.
pub fn results(messages: &[Message]) -> Vec<Option<CommandOutput>> {
    messages
        .iter()
        .flat_map(Message::commands)
        .map(|command| command.result().cloned())
        .collect()
}
