//! Error types for configuration lookup, assignment and resolution.

use thiserror::Error;

use super::FieldType;
use crate::diagnostics::codes;

/// A value could not be converted to a field's declared type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot convert '{value}' to {expected}: {reason}")]
pub struct ConversionError {
    /// The target type.
    pub expected: FieldType,
    /// The offending value as written.
    pub value: String,
    /// Why the conversion failed.
    pub reason: String,
}

impl ConversionError {
    /// Creates a conversion error.
    #[must_use]
    pub fn new(expected: &FieldType, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            expected: expected.clone(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by configuration tree operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No field exists at the given path.
    #[error("configuration field '{0}' not found")]
    FieldNotFound(String),

    /// An unqualified field name exists in several namespaces.
    #[error("configuration field name '{name}' is ambiguous, did you mean: {}", .alternatives.join(", "))]
    AmbiguousField {
        /// The name as written.
        name: String,
        /// Fully qualified candidates.
        alternatives: Vec<String>,
    },

    /// The assigned value does not convert to the field type.
    #[error("couldn't assign configuration field '{path}': {source}")]
    Conversion {
        /// Qualified field path.
        path: String,
        /// Underlying conversion failure.
        source: ConversionError,
    },

    /// A namespace with the same name already exists.
    #[error("configuration namespace '{0}' is already registered")]
    DuplicateNamespace(String),

    /// A late-bound reference names a path that does not exist.
    #[error("field '{field}' refers to unknown configuration path '{root_path}'")]
    VarRefNotFound {
        /// Local field holding the reference.
        field: String,
        /// Referenced root path.
        root_path: String,
    },

    /// A late-bound reference holds a value of an incompatible type.
    #[error("field '{field}' can't take the value of '{root_path}': {source}")]
    VarRefConversion {
        /// Local field holding the reference.
        field: String,
        /// Referenced root path.
        root_path: String,
        /// Underlying conversion failure.
        source: ConversionError,
    },
}

impl ConfigError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FieldNotFound(_) => codes::FIELD_NOT_FOUND,
            Self::AmbiguousField { .. } => codes::AMBIGUOUS_FIELD_NAME,
            Self::Conversion { .. } => codes::TYPE_CONVERSION_FAILURE,
            Self::DuplicateNamespace(_) => codes::DUPLICATE_NAMESPACE,
            Self::VarRefNotFound { .. } => codes::VAR_REF_NOT_FOUND,
            Self::VarRefConversion { .. } => codes::VAR_REF_CONVERSION,
        }
    }
}
