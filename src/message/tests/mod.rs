//! Unit tests for document messages and commands.

use rstest::{fixture, rstest};
use serde_json::json;

use crate::message::domain::{Command, CommandOutput, ContentItem, Message, SourceLocation};

#[fixture]
fn mixed_message() -> Message {
    Message::new(
        "user",
        vec![
            ContentItem::text("First paragraph.\n"),
            ContentItem::Command(Command::new(
                "prapti.model = gpt-4",
                SourceLocation::new("chat.md").with_line(2),
            )),
            ContentItem::text("Second paragraph.\n"),
            ContentItem::Command(
                Command::new("prapti.n = 2", SourceLocation::new("chat.md").with_line(4))
                    .disabled(),
            ),
        ],
    )
}

#[rstest]
fn commands_are_listed_in_document_order(mixed_message: Message) {
    let texts: Vec<_> = mixed_message.commands().map(Command::text).collect();

    assert_eq!(texts, ["prapti.model = gpt-4", "prapti.n = 2"]);
}

#[rstest]
fn disabled_commands_are_kept_but_flagged(mixed_message: Message) {
    let enabled: Vec<_> = mixed_message.commands().map(Command::is_enabled).collect();

    assert_eq!(enabled, [true, false]);
}

#[rstest]
fn text_content_skips_commands(mixed_message: Message) {
    assert_eq!(
        mixed_message.text_content(),
        "First paragraph.\nSecond paragraph.\n"
    );
}

#[rstest]
fn result_slot_is_written_in_place(mut mixed_message: Message) {
    for command in mixed_message.commands_mut() {
        command.set_result(Some(CommandOutput::text("done")));
    }

    assert!(
        mixed_message
            .commands()
            .all(|command| command.result() == Some(&CommandOutput::text("done")))
    );
    assert_eq!(mixed_message.content().len(), 4);
}

#[rstest]
fn message_builders_set_flags() {
    let message = Message::text_message("assistant", "Hi")
        .with_name("narrator")
        .private()
        .disabled();

    assert_eq!(message.name(), Some("narrator"));
    assert!(message.is_private());
    assert!(!message.is_enabled());
    assert_eq!(message.text_content(), "Hi");
}

#[rstest]
#[case(SourceLocation::unknown(), "<unknown location>")]
#[case(SourceLocation::new("a.md"), "a.md")]
#[case(SourceLocation::new("a.md").with_line(7), "a.md:7")]
#[case(SourceLocation::new("a.md").with_position(7, 2), "a.md:7:2")]
#[case(SourceLocation::unknown().with_line(7), "line 7")]
fn source_locations_display(#[case] location: SourceLocation, #[case] expected: &str) {
    assert_eq!(location.to_string(), expected);
}

#[rstest]
fn command_outputs_expose_their_variant() {
    let value = CommandOutput::Value(json!(42));
    let message = CommandOutput::Message(Message::text_message("assistant", "Test!"));

    assert_eq!(value.as_value(), Some(&json!(42)));
    assert!(value.as_message().is_none());
    assert_eq!(
        message.as_message().map(Message::text_content),
        Some("Test!".to_owned())
    );
}

#[rstest]
fn command_output_serialises_with_kind_tag() {
    let serialised = serde_json::to_value(CommandOutput::text("hi")).expect("serialisable");

    assert_eq!(serialised, json!({ "kind": "value", "output": "hi" }));
}
