//! Then steps for command interpretation scenarios.

use prapti::message::domain::{CommandOutput, Message};
use prapti::plugin::builtin::test_responder::{FIRED, RESOLVED_RESPONDER_CONFIG};
use rstest_bdd_macros::then;
use serde_json::json;

use super::world::InterpretationWorld;

fn command_result(
    world: &InterpretationWorld,
    index: usize,
) -> Result<Option<CommandOutput>, eyre::Report> {
    world
        .messages
        .iter()
        .flat_map(Message::commands)
        .nth(index.saturating_sub(1))
        .map(|command| command.result().cloned())
        .ok_or_else(|| eyre::eyre!("document has no command {index}"))
}

#[then(r#"the setting "{path}" is {value}"#)]
fn setting_is(world: &InterpretationWorld, path: String, value: String) -> Result<(), eyre::Report> {
    let stored = world
        .state
        .root_config
        .get(&path)
        .ok_or_else(|| eyre::eyre!("no setting '{path}'"))?;
    if stored.to_string() != value {
        return Err(eyre::eyre!("expected '{path}' to be {value}, found {stored}"));
    }
    Ok(())
}

#[then(r#"the setting "{path}" has not been assigned"#)]
fn setting_unassigned(world: &InterpretationWorld, path: String) -> Result<(), eyre::Report> {
    if world.state.root_config.is_assigned(&path) {
        return Err(eyre::eyre!("expected '{path}' to be unassigned"));
    }
    Ok(())
}

#[then(r#"{count:usize} diagnostics with code "{code}" are reported"#)]
fn diagnostics_with_code(
    world: &InterpretationWorld,
    count: usize,
    code: String,
) -> Result<(), eyre::Report> {
    let found = world.log.count(&code);
    if found != count {
        return Err(eyre::eyre!(
            "expected {count} '{code}' diagnostics, found {found}: {:?}",
            world.log.diagnostics()
        ));
    }
    Ok(())
}

#[then("no diagnostics are reported")]
fn no_diagnostics(world: &InterpretationWorld) -> Result<(), eyre::Report> {
    let reported = world.log.diagnostics();
    if !reported.is_empty() {
        return Err(eyre::eyre!("expected no diagnostics, found {reported:?}"));
    }
    Ok(())
}

#[then(r#"command {index:usize} has the result "{text}""#)]
fn command_has_result(
    world: &InterpretationWorld,
    index: usize,
    text: String,
) -> Result<(), eyre::Report> {
    let result = command_result(world, index)?;
    if result != Some(CommandOutput::text(text.as_str())) {
        return Err(eyre::eyre!("command {index} has result {result:?}, expected '{text}'"));
    }
    Ok(())
}

#[then("command {index:usize} has no result")]
fn command_has_no_result(world: &InterpretationWorld, index: usize) -> Result<(), eyre::Report> {
    let result = command_result(world, index)?;
    if result.is_some() {
        return Err(eyre::eyre!("command {index} has result {result:?}, expected none"));
    }
    Ok(())
}

#[then("the fire action has not run")]
fn fire_not_run(world: &InterpretationWorld) -> Result<(), eyre::Report> {
    if let Some(record) = world.state.test_exfil.get(FIRED) {
        return Err(eyre::eyre!("fire ran unexpectedly: {record}"));
    }
    Ok(())
}

#[then(r#"the fire action ran with arguments "{args}""#)]
fn fire_ran_with(world: &InterpretationWorld, args: String) -> Result<(), eyre::Report> {
    let record = world
        .state
        .test_exfil
        .get(FIRED)
        .ok_or_else(|| eyre::eyre!("fire did not run"))?;
    if record.get("args") != Some(&json!(args)) {
        return Err(eyre::eyre!("fire ran with {record}, expected arguments '{args}'"));
    }
    Ok(())
}

#[then("the responder used temperature {temperature}")]
fn responder_temperature(world: &InterpretationWorld, temperature: i64) -> Result<(), eyre::Report> {
    let used = world
        .state
        .test_exfil
        .get(RESOLVED_RESPONDER_CONFIG)
        .and_then(|config| config.get("temperature"))
        .ok_or_else(|| eyre::eyre!("the responder recorded no configuration"))?;
    if used != &json!(temperature) {
        return Err(eyre::eyre!("expected temperature {temperature}, found {used}"));
    }
    Ok(())
}

#[then(r#"the responder answered "{text}""#)]
fn responder_answered(world: &InterpretationWorld, text: String) -> Result<(), eyre::Report> {
    let expected = Message::text_message("assistant", text.as_str());
    if world.state.responses.last() != Some(&expected) {
        return Err(eyre::eyre!(
            "expected the last response to be '{text}', found {:?}",
            world.state.responses.last()
        ));
    }
    Ok(())
}
