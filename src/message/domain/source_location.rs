//! Positions within an input document.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable pointer to a place in an input document.
///
/// Every diagnostic carries a source location so that users can find the
/// offending line. Any of the parts may be unknown.
///
/// # Examples
///
/// ```
/// use prapti::message::domain::SourceLocation;
///
/// let location = SourceLocation::new("notes/chat.md").with_position(12, 3);
/// assert_eq!(location.to_string(), "notes/chat.md:12:3");
/// assert_eq!(SourceLocation::unknown().to_string(), "<unknown location>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_path: Option<Utf8PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

impl SourceLocation {
    /// Creates a location pointing at a whole file.
    #[must_use]
    pub fn new(file_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            line: None,
            column: None,
        }
    }

    /// Creates a location with no known file or position.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file_path: None,
            line: None,
            column: None,
        }
    }

    /// Sets the 1-based line number.
    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the 1-based line and column numbers.
    #[must_use]
    pub const fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Returns the file path, if known.
    #[must_use]
    pub fn file_path(&self) -> Option<&Utf8Path> {
        self.file_path.as_deref()
    }

    /// Returns the 1-based line number, if known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// Returns the 1-based column number, if known.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file_path, self.line, self.column) {
            (None, None, _) => f.write_str("<unknown location>"),
            (Some(path), None, _) => write!(f, "{path}"),
            (Some(path), Some(line), None) => write!(f, "{path}:{line}"),
            (Some(path), Some(line), Some(column)) => write!(f, "{path}:{line}:{column}"),
            (None, Some(line), None) => write!(f, "line {line}"),
            (None, Some(line), Some(column)) => write!(f, "line {line}:{column}"),
        }
    }
}
