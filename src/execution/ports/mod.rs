//! Port for reading in-tree configuration documents.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::diagnostics::codes;
use crate::message::domain::Message;

/// Result type for configuration document loading.
pub type ConfigDocumentResult<T> = Result<T, ConfigDocumentError>;

/// Port for loading the configuration document of a directory.
///
/// Implementations parse the document into messages; the caller only needs
/// its commands, and never interprets them during discovery.
pub trait ConfigDocumentLoader: Send + Sync {
    /// Loads the configuration document in `dir`.
    ///
    /// Returns `Ok(None)` when the directory has no configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigDocumentError`] when a document exists but cannot be
    /// read or parsed.
    fn load(&self, dir: &Utf8Path) -> ConfigDocumentResult<Option<Vec<Message>>>;
}

/// Errors for configuration document loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigDocumentError {
    /// The document exists but could not be read.
    #[error("couldn't read configuration document in '{dir}': {reason}")]
    Unreadable {
        /// Directory holding the document.
        dir: Utf8PathBuf,
        /// Underlying failure.
        reason: String,
    },
}

impl ConfigDocumentError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        codes::CONFIG_DOCUMENT_UNREADABLE
    }
}
