//! Unit tests for actions and the action registry.

use rstest::{fixture, rstest};
use std::sync::Arc;

use crate::action::domain::{Action, ActionContext, ActionError, ActionRegistry, DispatchError};
use crate::diagnostics::adapters::RecordingDiagnostics;
use crate::diagnostics::codes;
use crate::execution::domain::{ExecutionState, RunOptions};
use crate::message::domain::{CommandOutput, SourceLocation};

fn noop(qualified_name: &str) -> Action {
    Action::new(qualified_name, |_, _, _| None).expect("valid action name")
}

#[fixture]
fn registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    for name in ["koboldcpp.text.set_stop", "openai.chat.list_models", "openai.chat.fire"] {
        registry.add_action(noop(name)).expect("unique name");
    }
    registry
        .add_action(noop("prapti.test.test_responder.fire").exclamation_only())
        .expect("unique name");
    registry
}

#[rstest]
#[case("prapti.test.test_responder.echo", "prapti.test.test_responder", "echo")]
#[case("ns.act-ion", "ns", "act-ion")]
#[case("a/b.c\\d", "a/b", "c\\d")]
fn qualified_names_split_at_the_last_dot(
    #[case] qualified_name: &str,
    #[case] namespace: &str,
    #[case] name: &str,
) {
    let action = noop(qualified_name);

    assert_eq!(action.qualified_name(), qualified_name);
    assert_eq!(action.namespace(), namespace);
    assert_eq!(action.name(), name);
}

#[rstest]
#[case("unqualified")]
#[case("ns.")]
#[case(".name")]
#[case("ns..name")]
#[case("ns.na me")]
#[case("ns.name!")]
#[case("")]
fn malformed_names_are_rejected(#[case] qualified_name: &str) {
    let result = Action::new(qualified_name, |_, _, _| None);

    assert!(matches!(result, Err(ActionError::InvalidName { .. })));
}

#[rstest]
fn duplicate_qualified_names_are_rejected(mut registry: ActionRegistry) {
    let error = registry
        .add_action(noop("openai.chat.fire"))
        .expect_err("name is taken");

    assert_eq!(error, ActionError::Duplicate("openai.chat.fire".to_owned()));
    assert_eq!(error.code(), codes::INVALID_ACTION);
    assert_eq!(registry.len(), 4);
}

#[rstest]
#[case("koboldcpp.text.set_stop")]
#[case("set_stop")]
fn lookup_finds_qualified_and_bare_names(registry: ActionRegistry, #[case] name: &str) {
    let names: Vec<_> = registry
        .lookup_action(name)
        .into_iter()
        .map(Action::qualified_name)
        .collect();

    assert_eq!(names, ["koboldcpp.text.set_stop"]);
}

#[rstest]
#[case("text.set_stop")]
#[case("koboldcpp")]
#[case("stop")]
fn partial_names_do_not_match(registry: ActionRegistry, #[case] name: &str) {
    assert!(registry.lookup_action(name).is_empty());
}

#[rstest]
fn shared_bare_names_return_every_match(registry: ActionRegistry) {
    let names: Vec<_> = registry
        .lookup_action("fire")
        .into_iter()
        .map(Action::qualified_name)
        .collect();

    assert_eq!(names, ["openai.chat.fire", "prapti.test.test_responder.fire"]);
}

#[rstest]
fn ambiguous_selection_lists_alternatives(registry: ActionRegistry) {
    let error = registry.select("fire", true).expect_err("ambiguous");

    assert_eq!(error.code(), codes::AMBIGUOUS_ACTION_NAME);
    assert_eq!(
        error.to_string(),
        "didn't run action 'fire'. action name is ambiguous, did you mean: \
         openai.chat.fire or prapti.test.test_responder.fire"
    );
}

#[rstest]
fn three_alternatives_are_joined_with_commas_and_or() {
    let error = DispatchError::Ambiguous {
        name: "go".to_owned(),
        alternatives: vec!["a.go".to_owned(), "b.go".to_owned(), "c.go".to_owned()],
    };

    assert!(error.to_string().ends_with("did you mean: a.go, b.go or c.go"));
}

#[rstest]
fn unknown_names_are_not_found(registry: ActionRegistry) {
    let error = registry.select("missing", false).expect_err("not registered");

    assert_eq!(error, DispatchError::NotFound("missing".to_owned()));
    assert_eq!(error.code(), codes::ACTION_NOT_FOUND);
}

#[rstest]
fn exclamation_only_actions_need_the_marker(registry: ActionRegistry) {
    let qualified = "prapti.test.test_responder.fire";

    let refused = registry.select(qualified, false).expect_err("needs '!'");
    assert_eq!(refused.code(), codes::EXCLAMATION_REQUIRED);

    let selected = registry.select(qualified, true).expect("'!' was written");
    assert!(selected.is_exclamation_only());
}

#[rstest]
fn ordinary_actions_run_with_or_without_the_marker(registry: ActionRegistry) {
    assert!(registry.select("list_models", false).is_ok());
    assert!(registry.select("list_models", true).is_ok());
}

#[rstest]
fn invoke_passes_name_arguments_and_context() {
    let mut state = ExecutionState::new(
        RunOptions::new("chat.md"),
        Arc::new(RecordingDiagnostics::new()),
    );
    let action = Action::new("prapti.debug.describe", |name, raw_args, context| {
        let location = context.source_loc().to_string();
        Some(CommandOutput::text(format!("{name}|{raw_args}|{location}")))
    })
    .expect("valid name");
    let mut context = ActionContext::new(
        &mut state,
        None,
        SourceLocation::new("chat.md").with_line(3),
    );

    let output = action.invoke("describe", "a b", &mut context);

    assert_eq!(output, Some(CommandOutput::text("describe|a b|chat.md:3")));
    assert!(context.plugin_config_namespace().is_none());
}
