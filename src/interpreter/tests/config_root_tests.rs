//! Tests for config-root detection.

use rstest::rstest;

use super::fixtures::commands;
use crate::interpreter::domain::is_config_root;
use crate::message::domain::{Command, ContentItem, Message, SourceLocation};

#[rstest]
#[case("prapti.config_root = true")]
#[case("config_root = true")]
#[case("config_root=true")]
#[case("   prapti.config_root   =   true")]
#[case("config_root = true # stop here")]
fn matching_commands_mark_a_root(#[case] text: &str) {
    let document = vec![commands("_prapti", &["prapti.model = gpt-4", text])];

    assert!(is_config_root(&document));
}

#[rstest]
#[case("prapti.config_root = false")]
#[case("config_root")]
#[case("config_root true")]
#[case("other.config_root = true")]
#[case("!config_root = true")]
#[case("config_root = True")]
#[case("config_root_extra = true")]
fn other_commands_do_not(#[case] text: &str) {
    let document = vec![commands("_prapti", &[text])];

    assert!(!is_config_root(&document));
}

#[rstest]
fn disabled_commands_and_messages_are_ignored() {
    let disabled_command = Message::new(
        "_prapti",
        vec![ContentItem::Command(
            Command::new("config_root = true", SourceLocation::unknown()).disabled(),
        )],
    );
    let disabled_message = commands("_prapti", &["config_root = true"]).disabled();

    assert!(!is_config_root(&[disabled_command, disabled_message]));
}

#[rstest]
fn text_items_are_never_scanned() {
    let document = vec![Message::text_message("user", "config_root = true")];

    assert!(!is_config_root(&document));
}

#[rstest]
fn any_message_may_declare_the_root() {
    let document = vec![
        commands("user", &["prapti.n = 2"]),
        Message::text_message("assistant", "hello"),
        commands("_prapti", &["config_root = true"]),
    ];

    assert!(is_config_root(&document));
}

#[rstest]
fn scanning_does_not_touch_results() {
    let document = vec![commands("_prapti", &["config_root = true"])];

    assert!(is_config_root(&document));
    assert!(document
        .iter()
        .flat_map(Message::commands)
        .all(|command| command.result().is_none()));
}
