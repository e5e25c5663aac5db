//! Late-bound variable references.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConfigError, Configuration, RootConfiguration};
use crate::diagnostics::{DiagnosticsSink, DiagnosticsSinkExt};

/// A late-bound reference to a root configuration path.
///
/// A local field bound to a `VarRef` takes the value of the referenced path
/// at use time, but only if that path has been explicitly assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarRef(String);

impl VarRef {
    /// Creates a reference to a dotted root path such as `prapti.temperature`.
    #[must_use]
    pub fn new(root_path: impl Into<String>) -> Self {
        Self(root_path.into())
    }

    /// Returns the referenced root path.
    #[must_use]
    pub fn root_path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarRef({})", self.0)
    }
}

/// Binds a local field to a [`VarRef`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarBinding {
    /// The local field name.
    pub field: String,
    /// Where the field's effective value is read from.
    pub var_ref: VarRef,
}

impl VarBinding {
    /// Creates a binding.
    #[must_use]
    pub fn new(field: impl Into<String>, var_ref: VarRef) -> Self {
        Self {
            field: field.into(),
            var_ref,
        }
    }
}

/// Returns a copy of `config` with late-bound references applied.
///
/// For each binding whose root path has been explicitly assigned, the root
/// value is converted to the local field's type and written into the copy.
/// Unassigned paths leave the local value in place. Resolution is computed
/// fresh on every call; `config` itself is never modified.
///
/// Problems are reported through `log` and the affected field keeps its
/// local value.
///
/// # Examples
///
/// ```
/// use prapti::config::domain::{
///     Configuration, FieldTable, RootConfiguration, VarBinding, VarRef, resolve_var_refs,
/// };
/// use prapti::diagnostics::adapters::RecordingDiagnostics;
///
/// #[derive(Debug, Clone)]
/// struct SamplerConfiguration {
///     temperature: f64,
/// }
///
/// impl Configuration for SamplerConfiguration {
///     fn fields() -> FieldTable<Self> {
///         FieldTable::<Self>::new().field(
///             "temperature",
///             |config| &config.temperature,
///             |config| &mut config.temperature,
///         )
///     }
/// }
///
/// let bindings = [VarBinding::new("temperature", VarRef::new("prapti.temperature"))];
/// let local = SamplerConfiguration { temperature: 0.8 };
/// let mut root = RootConfiguration::new();
/// let log = RecordingDiagnostics::new();
///
/// assert_eq!(resolve_var_refs(&local, &bindings, &root, &log).temperature, 0.8);
///
/// root.assign("prapti.temperature", "0.5").expect("core field");
/// assert_eq!(resolve_var_refs(&local, &bindings, &root, &log).temperature, 0.5);
/// assert_eq!(local.temperature, 0.8);
/// ```
#[must_use]
pub fn resolve_var_refs<C: Configuration>(
    config: &C,
    bindings: &[VarBinding],
    root: &RootConfiguration,
    log: &dyn DiagnosticsSink,
) -> C {
    let table = C::fields();
    let mut resolved = config.clone();
    for binding in bindings {
        let root_path = binding.var_ref.root_path();
        let value = match root.lookup_assigned(root_path) {
            Ok(Some(value)) => value,
            Ok(None) => continue,
            Err(ConfigError::FieldNotFound(_)) => {
                report(
                    log,
                    &ConfigError::VarRefNotFound {
                        field: binding.field.clone(),
                        root_path: root_path.to_owned(),
                    },
                );
                continue;
            }
            Err(error) => {
                report(log, &error);
                continue;
            }
        };
        match table.set(&mut resolved, &binding.field, value) {
            Ok(true) => {
                tracing::trace!(field = %binding.field, root_path, "resolved late-bound field");
            }
            Ok(false) => report(
                log,
                &ConfigError::FieldNotFound(binding.field.clone()),
            ),
            Err(source) => report(
                log,
                &ConfigError::VarRefConversion {
                    field: binding.field.clone(),
                    root_path: root_path.to_owned(),
                    source,
                },
            ),
        }
    }
    resolved
}

fn report(log: &dyn DiagnosticsSink, error: &ConfigError) {
    log.error(error.code(), error.to_string(), None);
}
