//! Scenario world for command interpretation.

use std::sync::Arc;

use prapti::diagnostics::adapters::RecordingDiagnostics;
use prapti::execution::domain::{ExecutionState, RunOptions};
use prapti::message::domain::{Command, ContentItem, Message, SourceLocation};
use rstest::fixture;

/// State shared by the steps of one scenario.
pub struct InterpretationWorld {
    pub state: ExecutionState,
    pub log: Arc<RecordingDiagnostics>,
    pub document: Vec<Vec<String>>,
    pub messages: Vec<Message>,
}

impl InterpretationWorld {
    /// Builds messages from the commands collected so far, unless a previous
    /// pass already did.
    pub fn messages_for_pass(&mut self) -> &mut Vec<Message> {
        if self.messages.is_empty() {
            self.messages = build_messages(&self.document);
        }
        &mut self.messages
    }
}

#[fixture]
pub fn world() -> InterpretationWorld {
    let log = Arc::new(RecordingDiagnostics::new());
    InterpretationWorld {
        state: ExecutionState::new(RunOptions::new("chat.md"), log.clone()),
        log,
        document: Vec::new(),
        messages: Vec::new(),
    }
}

/// Turns lists of command texts into user messages with line numbers.
pub fn build_messages(document: &[Vec<String>]) -> Vec<Message> {
    let mut line = 0;
    document
        .iter()
        .map(|texts| {
            let content = texts
                .iter()
                .map(|text| {
                    line += 1;
                    ContentItem::Command(Command::new(
                        text.as_str(),
                        SourceLocation::new("chat.md").with_line(line),
                    ))
                })
                .collect();
            Message::new("user", content)
        })
        .collect()
}
