//! In-memory configuration documents for tests and embedding.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;

use crate::execution::ports::{ConfigDocumentError, ConfigDocumentLoader, ConfigDocumentResult};
use crate::message::domain::Message;

/// A loader backed by documents held in memory, keyed by directory.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use prapti::execution::adapters::InMemoryConfigDocuments;
/// use prapti::execution::ports::ConfigDocumentLoader;
///
/// let loader = InMemoryConfigDocuments::new().with_document("/work", Vec::new());
/// assert!(matches!(loader.load(Utf8Path::new("/work")), Ok(Some(_))));
/// assert!(matches!(loader.load(Utf8Path::new("/")), Ok(None)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigDocuments {
    documents: BTreeMap<Utf8PathBuf, Vec<Message>>,
    unreadable: BTreeMap<Utf8PathBuf, String>,
}

impl InMemoryConfigDocuments {
    /// Creates a loader with no documents.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the configuration document for `dir`.
    #[must_use]
    pub fn with_document(mut self, dir: impl Into<Utf8PathBuf>, messages: Vec<Message>) -> Self {
        self.documents.insert(dir.into(), messages);
        self
    }

    /// Makes loading from `dir` fail with `reason`.
    #[must_use]
    pub fn with_unreadable(mut self, dir: impl Into<Utf8PathBuf>, reason: impl Into<String>) -> Self {
        self.unreadable.insert(dir.into(), reason.into());
        self
    }
}

impl ConfigDocumentLoader for InMemoryConfigDocuments {
    fn load(&self, dir: &Utf8Path) -> ConfigDocumentResult<Option<Vec<Message>>> {
        if let Some(reason) = self.unreadable.get(dir) {
            return Err(ConfigDocumentError::Unreadable {
                dir: dir.to_path_buf(),
                reason: reason.clone(),
            });
        }
        Ok(self.documents.get(dir).cloned())
    }
}
