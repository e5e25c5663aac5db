//! Unit tests for diagnostic records and sinks.

use mockall::{mock, predicate::function};
use rstest::rstest;

use crate::diagnostics::{
    Diagnostic, DiagnosticsSink, DiagnosticsSinkExt, Severity,
    adapters::{RecordingDiagnostics, TracingDiagnostics},
    codes,
};
use crate::message::domain::SourceLocation;

mock! {
    pub Sink {}

    impl DiagnosticsSink for Sink {
        fn emit(&self, diagnostic: Diagnostic);
    }
}

#[rstest]
fn extension_helpers_set_severity_and_location() {
    let mut sink = MockSink::new();
    sink.expect_emit()
        .with(function(|diagnostic: &Diagnostic| {
            diagnostic.severity == Severity::Warning
                && diagnostic.code == "unsupported-chat-role"
                && diagnostic.source_loc.as_ref().and_then(SourceLocation::line) == Some(4)
        }))
        .times(1)
        .return_const(());

    let location = SourceLocation::new("chat.md").with_line(4);
    sink.warning("unsupported-chat-role", "role is not supported", Some(&location));
}

#[rstest]
fn recording_sink_keeps_emission_order() {
    let sink = RecordingDiagnostics::new();
    sink.error(codes::FIELD_NOT_FOUND, "first", None);
    sink.info("note", "second", None);
    sink.error(codes::FIELD_NOT_FOUND, "third", None);

    let messages: Vec<_> = sink
        .diagnostics()
        .into_iter()
        .map(|diagnostic| diagnostic.message)
        .collect();
    assert_eq!(messages, ["first", "second", "third"]);
    assert_eq!(sink.count(codes::FIELD_NOT_FOUND), 2);
    assert_eq!(sink.errors().len(), 2);

    sink.clear();
    assert!(sink.diagnostics().is_empty());
}

#[rstest]
fn tracing_sink_counts_only_errors() {
    let sink = TracingDiagnostics::new();
    sink.debug("trace", "detail", None);
    sink.warning("careful", "hmm", None);
    sink.error(codes::UNKNOWN_COMMAND, "bad", None);

    assert_eq!(sink.error_count(), 1);
}

#[rstest]
#[case(None, "error: no such field [field-not-found]")]
#[case(
    Some(SourceLocation::new("a.md").with_position(2, 5)),
    "a.md:2:5: error: no such field [field-not-found]"
)]
fn diagnostic_display_includes_location_when_known(
    #[case] location: Option<SourceLocation>,
    #[case] expected: &str,
) {
    let diagnostic = Diagnostic::new(Severity::Error, codes::FIELD_NOT_FOUND, "no such field")
        .at(location.as_ref());

    assert_eq!(diagnostic.to_string(), expected);
}

#[rstest]
fn severities_are_ordered_by_seriousness() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
}
