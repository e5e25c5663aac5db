//! In-tree configuration directory discovery.

use camino::{Utf8Path, Utf8PathBuf};

use crate::diagnostics::{DiagnosticsSink, DiagnosticsSinkExt};
use crate::execution::ports::ConfigDocumentLoader;
use crate::interpreter::domain::is_config_root;

/// Collects the directories whose configuration documents apply to an input
/// file in `input_dir`.
///
/// The walk starts at `input_dir` and moves toward the filesystem root. Every
/// directory with a configuration document is collected, nearest first. The
/// walk stops after the first document that declares `config_root = true`.
/// Documents are scanned, never interpreted.
///
/// Unreadable documents are reported as warnings and skipped.
///
/// # Examples
///
/// ```
/// use camino::{Utf8Path, Utf8PathBuf};
/// use prapti::diagnostics::adapters::RecordingDiagnostics;
/// use prapti::execution::adapters::InMemoryConfigDocuments;
/// use prapti::execution::services::discover_config_dirs;
/// use prapti::message::domain::{Command, ContentItem, Message, SourceLocation};
///
/// let root_marker = Message::new(
///     "_prapti",
///     vec![ContentItem::Command(Command::new("config_root = true", SourceLocation::unknown()))],
/// );
/// let loader = InMemoryConfigDocuments::new()
///     .with_document("/work/project", vec![root_marker])
///     .with_document("/work", Vec::new());
///
/// let dirs = discover_config_dirs(
///     Utf8Path::new("/work/project/notes"),
///     &loader,
///     &RecordingDiagnostics::new(),
/// );
/// assert_eq!(dirs, [Utf8PathBuf::from("/work/project")]);
/// ```
#[must_use]
pub fn discover_config_dirs(
    input_dir: &Utf8Path,
    loader: &dyn ConfigDocumentLoader,
    log: &dyn DiagnosticsSink,
) -> Vec<Utf8PathBuf> {
    let mut found = Vec::new();
    for dir in input_dir.ancestors() {
        match loader.load(dir) {
            Ok(Some(document)) => {
                tracing::debug!(dir = %dir, "found configuration document");
                found.push(dir.to_path_buf());
                if is_config_root(&document) {
                    tracing::debug!(dir = %dir, "configuration root reached");
                    break;
                }
            }
            Ok(None) => {}
            Err(error) => log.warning(error.code(), error.to_string(), None),
        }
    }
    found
}
