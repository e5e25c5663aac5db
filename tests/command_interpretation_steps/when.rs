//! When steps for command interpretation scenarios.

use prapti::interpreter::services::interpret_commands;
use prapti::plugin::services::generate_responses;
use rstest_bdd_macros::when;

use super::world::InterpretationWorld;

fn interpret(world: &mut InterpretationWorld, is_final_sequence: bool) {
    let mut messages = std::mem::take(world.messages_for_pass());
    interpret_commands(&mut messages, &mut world.state, is_final_sequence);
    world.messages = messages;
}

#[when("the document is interpreted as a draft")]
fn interpreted_as_draft(world: &mut InterpretationWorld) {
    interpret(world, false);
}

#[when("the document is interpreted as the final pass")]
fn interpreted_as_final(world: &mut InterpretationWorld) {
    interpret(world, true);
}

#[when("the responder generates responses")]
fn responder_generates(world: &mut InterpretationWorld) -> Result<(), eyre::Report> {
    world.state.message_sequence = world.messages.clone();
    if generate_responses(&mut world.state) == 0 {
        return Err(eyre::eyre!("the responder produced nothing"));
    }
    Ok(())
}
