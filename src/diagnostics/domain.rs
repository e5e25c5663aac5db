//! Diagnostic records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::message::domain::SourceLocation;

/// Stable diagnostic codes emitted by this crate.
///
/// Plugins are free to emit their own codes; these are the ones the core
/// guarantees not to change.
pub mod codes {
    /// Command text does not match the command grammar.
    pub const UNKNOWN_COMMAND: &str = "unknown-command";
    /// An assignment has nothing after the `=`.
    pub const EMPTY_ASSIGNMENT: &str = "skipping-empty-assignment";
    /// An assignment names a field that does not exist.
    pub const FIELD_NOT_FOUND: &str = "field-not-found";
    /// An unqualified field name exists in more than one namespace.
    pub const AMBIGUOUS_FIELD_NAME: &str = "ambiguous-field-name";
    /// An assigned value cannot be converted to the field's type.
    pub const TYPE_CONVERSION_FAILURE: &str = "type-conversion-failure";
    /// No action matches the invoked name.
    pub const ACTION_NOT_FOUND: &str = "action-not-found";
    /// More than one action matches the invoked name.
    pub const AMBIGUOUS_ACTION_NAME: &str = "ambiguous-action-name";
    /// A `!`-only action was written without a `!`.
    pub const EXCLAMATION_REQUIRED: &str = "excl-only-action-without-excl";
    /// A late-bound reference names a path that does not exist.
    pub const VAR_REF_NOT_FOUND: &str = "var-ref-not-found";
    /// A late-bound reference holds a value of an incompatible type.
    pub const VAR_REF_CONVERSION: &str = "var-ref-conversion";
    /// A configuration namespace was registered twice.
    pub const DUPLICATE_NAMESPACE: &str = "duplicate-namespace";
    /// A plugin with the same name is already loaded.
    pub const PLUGIN_ALREADY_LOADED: &str = "plugin-already-loaded";
    /// A plugin name does not refer to a loaded plugin.
    pub const UNKNOWN_PLUGIN: &str = "unknown-plugin";
    /// A plugin cannot construct a responder.
    pub const RESPONDER_NOT_SUPPORTED: &str = "responder-not-supported";
    /// A responder with the same name already exists.
    pub const DUPLICATE_RESPONDER: &str = "duplicate-responder";
    /// A responder name does not refer to an existing responder.
    pub const UNKNOWN_RESPONDER: &str = "unknown-responder";
    /// Responses were requested but no responder is selected.
    pub const NO_RESPONDER_SELECTED: &str = "no-responder-selected";
    /// An action was invoked with arguments it does not accept.
    pub const INVALID_ARGUMENTS: &str = "invalid-arguments";
    /// An action could not be registered.
    pub const INVALID_ACTION: &str = "invalid-action";
    /// A configuration document could not be read.
    pub const CONFIG_DOCUMENT_UNREADABLE: &str = "config-document-unreadable";
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Tracing detail for developers.
    Debug,
    /// Noteworthy but expected events.
    Info,
    /// Something looks wrong but processing is unaffected.
    Warning,
    /// A command or operation was skipped.
    Error,
}

impl Severity {
    /// Returns the lowercase name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the condition.
    pub severity: Severity,
    /// Stable machine-readable code, e.g. `field-not-found`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Where in the input the condition arose, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_loc: Option<SourceLocation>,
}

impl Diagnostic {
    /// Creates a diagnostic without a location.
    #[must_use]
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            source_loc: None,
        }
    }

    /// Attaches a source location.
    #[must_use]
    pub fn at(mut self, source_loc: Option<&SourceLocation>) -> Self {
        self.source_loc = source_loc.cloned();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_loc {
            Some(location) => write!(
                f,
                "{location}: {}: {} [{}]",
                self.severity, self.message, self.code
            ),
            None => write!(f, "{}: {} [{}]", self.severity, self.message, self.code),
        }
    }
}
