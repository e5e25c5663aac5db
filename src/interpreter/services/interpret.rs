//! Interpretation of commands against an execution state.

use crate::action::domain::{ActionContext, DispatchError};
use crate::diagnostics::DiagnosticsSinkExt;
use crate::execution::domain::ExecutionState;
use crate::interpreter::domain::{CommandError, ParsedCommand};
use crate::message::domain::{CommandOutput, Message, SourceLocation};

/// Interprets every enabled command of every enabled message, in order.
///
/// Each command's result slot is overwritten with the output of this pass:
/// the action's return value, or nothing for assignments and for commands
/// that were skipped. Text is never touched.
///
/// Commands written with `!` only run when they are in the last message of
/// the sequence and `is_final_sequence` is set; elsewhere they are deferred.
///
/// Problems with individual commands are reported to the state's
/// diagnostics sink and interpretation continues with the next command.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use prapti::diagnostics::adapters::RecordingDiagnostics;
/// use prapti::execution::domain::{ExecutionState, RunOptions};
/// use prapti::interpreter::services::interpret_commands;
/// use prapti::message::domain::{Command, ContentItem, Message, SourceLocation};
///
/// let mut state = ExecutionState::new(
///     RunOptions::new("chat.md"),
///     Arc::new(RecordingDiagnostics::new()),
/// );
/// let mut messages = vec![Message::new(
///     "user",
///     vec![ContentItem::Command(Command::new("prapti.n = 3", SourceLocation::unknown()))],
/// )];
///
/// interpret_commands(&mut messages, &mut state, false);
/// assert_eq!(state.root_config.core().n, Some(3));
/// ```
pub fn interpret_commands(
    messages: &mut [Message],
    state: &mut ExecutionState,
    is_final_sequence: bool,
) {
    let span = tracing::debug_span!(
        "prapti.interpret",
        run_id = %state.run_id(),
        is_final_sequence,
    );
    let _entered = span.enter();

    let final_index = if is_final_sequence {
        messages.len().checked_sub(1)
    } else {
        None
    };
    for (index, message) in messages.iter_mut().enumerate() {
        if !message.is_enabled() {
            continue;
        }
        let is_final_message = final_index == Some(index);
        for command in message.commands_mut() {
            if !command.is_enabled() {
                continue;
            }
            let result =
                interpret_command(command.text(), command.source_loc(), is_final_message, state);
            command.set_result(result);
        }
    }
}

/// Interprets the state's own message sequence.
///
/// Actions see the whole sequence in the state while they run. The pass works
/// on a copy and the command results are written back when it finishes.
pub fn interpret_message_sequence(state: &mut ExecutionState, is_final_sequence: bool) {
    let mut interpreted = state.message_sequence.clone();
    interpret_commands(&mut interpreted, state, is_final_sequence);
    for (message, pass) in state.message_sequence.iter_mut().zip(&interpreted) {
        for (command, visited) in message.commands_mut().zip(pass.commands()) {
            command.set_result(visited.result().cloned());
        }
    }
}

/// Selects and calls the action named `name`.
///
/// Returns the action's output. Lookup failures, ambiguity and the
/// exclamation policy are reported to the diagnostics sink and yield `None`
/// without calling anything.
pub fn run_action(
    has_exclamation: bool,
    name: &str,
    raw_args: &str,
    source_loc: &SourceLocation,
    state: &mut ExecutionState,
) -> Option<CommandOutput> {
    match dispatch(has_exclamation, name, raw_args, source_loc, state) {
        Ok(output) => output,
        Err(error) => {
            report(state, &CommandError::from(error), source_loc);
            None
        }
    }
}

fn dispatch(
    has_exclamation: bool,
    name: &str,
    raw_args: &str,
    source_loc: &SourceLocation,
    state: &mut ExecutionState,
) -> Result<Option<CommandOutput>, DispatchError> {
    let action = state.actions().select(name, has_exclamation)?.clone();
    tracing::debug!(
        action = action.qualified_name(),
        invoked_as = name,
        location = %source_loc,
        "running action"
    );
    let mut context = ActionContext::new(
        state,
        action.plugin_config().map(str::to_owned),
        source_loc.clone(),
    );
    Ok(action.invoke(name, raw_args, &mut context))
}

fn interpret_command(
    text: &str,
    source_loc: &SourceLocation,
    is_final_message: bool,
    state: &mut ExecutionState,
) -> Option<CommandOutput> {
    let span = tracing::trace_span!("command", location = %source_loc);
    let _entered = span.enter();

    let parsed = match ParsedCommand::parse(text) {
        Ok(parsed) => parsed,
        Err(error) => {
            report(state, &CommandError::from(error), source_loc);
            return None;
        }
    };

    if parsed.has_exclamation() && !is_final_message {
        tracing::debug!(command = text, location = %source_loc, "deferred '!' command");
        return None;
    }

    if parsed.is_assignment() {
        if let Err(error) = assign(&parsed, text, state) {
            report(state, &error, source_loc);
        }
        None
    } else {
        run_action(
            parsed.has_exclamation(),
            parsed.name(),
            parsed.rhs(),
            source_loc,
            state,
        )
    }
}

fn assign(parsed: &ParsedCommand, text: &str, state: &mut ExecutionState) -> Result<(), CommandError> {
    if parsed.rhs().is_empty() {
        return Err(CommandError::EmptyAssignment(text.to_owned()));
    }
    state.root_config.assign(parsed.name(), parsed.rhs())?;
    Ok(())
}

fn report(state: &ExecutionState, error: &CommandError, source_loc: &SourceLocation) {
    state
        .log()
        .error(error.code(), error.to_string(), Some(source_loc));
}
