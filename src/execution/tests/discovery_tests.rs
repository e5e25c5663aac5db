//! Tests for in-tree configuration directory discovery.

use camino::{Utf8Path, Utf8PathBuf};
use mockall::{Sequence, mock};
use rstest::rstest;

use crate::diagnostics::adapters::RecordingDiagnostics;
use crate::diagnostics::{Severity, codes};
use crate::execution::adapters::InMemoryConfigDocuments;
use crate::execution::ports::{
    ConfigDocumentError, ConfigDocumentLoader, ConfigDocumentResult,
};
use crate::execution::services::discover_config_dirs;
use crate::message::domain::{Command, ContentItem, Message, SourceLocation};

mock! {
    Loader {}

    impl ConfigDocumentLoader for Loader {
        fn load(&self, dir: &Utf8Path) -> ConfigDocumentResult<Option<Vec<Message>>>;
    }
}

fn document(commands: &[&str]) -> Vec<Message> {
    let content = commands
        .iter()
        .map(|text| ContentItem::Command(Command::new(*text, SourceLocation::unknown())))
        .collect();
    vec![Message::new("_prapti", content)]
}

fn dirs(paths: &[&str]) -> Vec<Utf8PathBuf> {
    paths.iter().map(Utf8PathBuf::from).collect()
}

#[rstest]
fn documents_are_collected_nearest_first() {
    let loader = InMemoryConfigDocuments::new()
        .with_document("/work/project/notes", document(&["prapti.n = 2"]))
        .with_document("/work", document(&["prapti.model = gpt-4"]))
        .with_document("/", document(&[]));
    let log = RecordingDiagnostics::new();

    let found = discover_config_dirs(Utf8Path::new("/work/project/notes"), &loader, &log);

    assert_eq!(found, dirs(&["/work/project/notes", "/work", "/"]));
    assert!(log.diagnostics().is_empty());
}

#[rstest]
#[case("prapti.config_root = true")]
#[case("config_root = true")]
fn a_config_root_ends_the_search(#[case] marker: &str) {
    let loader = InMemoryConfigDocuments::new()
        .with_document("/work/project/notes", document(&["prapti.n = 2"]))
        .with_document("/work/project", document(&[marker]))
        .with_document("/work", document(&["prapti.model = gpt-4"]));
    let log = RecordingDiagnostics::new();

    let found = discover_config_dirs(Utf8Path::new("/work/project/notes"), &loader, &log);

    assert_eq!(found, dirs(&["/work/project/notes", "/work/project"]));
}

#[rstest]
fn a_root_in_the_input_directory_ends_the_search_at_once() {
    let loader = InMemoryConfigDocuments::new()
        .with_document("/work", document(&["config_root = true"]))
        .with_document("/", document(&[]));
    let log = RecordingDiagnostics::new();

    let found = discover_config_dirs(Utf8Path::new("/work"), &loader, &log);

    assert_eq!(found, dirs(&["/work"]));
}

#[rstest]
fn unreadable_documents_are_skipped_with_a_warning() {
    let loader = InMemoryConfigDocuments::new()
        .with_unreadable("/work/project", "permission denied")
        .with_document("/work", document(&[]));
    let log = RecordingDiagnostics::new();

    let found = discover_config_dirs(Utf8Path::new("/work/project"), &loader, &log);

    assert_eq!(found, dirs(&["/work"]));
    let warnings = log.with_code(codes::CONFIG_DOCUMENT_UNREADABLE);
    assert_eq!(warnings.len(), 1);
    assert!(warnings.iter().all(|warning| warning.severity == Severity::Warning
        && warning.message.contains("permission denied")));
}

#[rstest]
fn no_documents_means_no_directories() {
    let loader = InMemoryConfigDocuments::new();
    let log = RecordingDiagnostics::new();

    assert!(discover_config_dirs(Utf8Path::new("a/b"), &loader, &log).is_empty());
}

#[rstest]
fn directories_are_visited_from_the_input_upwards_and_never_past_a_root() {
    let mut loader = MockLoader::new();
    let mut sequence = Sequence::new();
    loader
        .expect_load()
        .withf(|dir| dir.as_str() == "/work/project/notes")
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(None));
    loader
        .expect_load()
        .withf(|dir| dir.as_str() == "/work/project")
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(Some(document(&["config_root = true"]))));
    loader
        .expect_load()
        .withf(|dir| dir.as_str() == "/work")
        .never();
    let log = RecordingDiagnostics::new();

    let found = discover_config_dirs(Utf8Path::new("/work/project/notes"), &loader, &log);

    assert_eq!(found, dirs(&["/work/project"]));
}

#[rstest]
fn loader_errors_name_the_directory() {
    let error = ConfigDocumentError::Unreadable {
        dir: Utf8PathBuf::from("/work"),
        reason: "is a directory".to_owned(),
    };

    assert_eq!(error.code(), codes::CONFIG_DOCUMENT_UNREADABLE);
    assert_eq!(
        error.to_string(),
        "couldn't read configuration document in '/work': is a directory"
    );
}
