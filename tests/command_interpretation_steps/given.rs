//! Given steps for command interpretation scenarios.

use eyre::WrapErr;
use prapti::action::domain::Action;
use prapti::interpreter::services::interpret_commands;
use prapti::message::domain::CommandOutput;
use prapti::plugin::services::install_core;
use rstest_bdd_macros::given;

use super::world::{InterpretationWorld, build_messages};

#[given("an execution state with the core actions installed")]
fn core_actions_installed(world: &mut InterpretationWorld) -> Result<(), eyre::Report> {
    install_core(&mut world.state).wrap_err("install core actions")?;
    Ok(())
}

#[given("the test responder is loaded and selected")]
fn test_responder_loaded(world: &mut InterpretationWorld) -> Result<(), eyre::Report> {
    let mut setup = build_messages(&[vec![
        "prapti.plugins.load prapti.test.test_responder".to_owned(),
        "prapti.responder.new default prapti.test.test_responder".to_owned(),
    ]]);
    interpret_commands(&mut setup, &mut world.state, true);
    let reported = world.log.diagnostics();
    if !reported.is_empty() {
        return Err(eyre::eyre!("setup reported diagnostics: {reported:?}"));
    }
    Ok(())
}

#[given(r#"another plugin registers the action "{qualified_name}""#)]
fn another_plugin_action(
    world: &mut InterpretationWorld,
    qualified_name: String,
) -> Result<(), eyre::Report> {
    let action = Action::new(qualified_name, |_, raw_args, _| {
        Some(CommandOutput::text(format!("other: {raw_args}")))
    })
    .wrap_err("build action")?;
    world
        .state
        .actions_mut()
        .add_action(action)
        .wrap_err("register action")?;
    Ok(())
}

#[given(r#"a message with the command "{text}""#)]
fn a_message_with_command(world: &mut InterpretationWorld, text: String) {
    world.document.push(vec![text]);
}

#[given(r#"the message also has the command "{text}""#)]
fn the_message_also_has(world: &mut InterpretationWorld, text: String) -> Result<(), eyre::Report> {
    world
        .document
        .last_mut()
        .ok_or_else(|| eyre::eyre!("no message in scenario document"))?
        .push(text);
    Ok(())
}
