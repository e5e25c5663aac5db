//! The core `prapti` configuration namespace.

use serde::{Deserialize, Serialize};

use super::{Configuration, FieldTable};

/// Name of the core configuration namespace.
pub const CORE_NAMESPACE: &str = "prapti";

/// Prefix of responder configuration namespaces (`responders.<name>`).
pub const RESPONDERS_NAMESPACE: &str = "responders";

/// Settings shared by the whole run.
///
/// The generation parameters (`model`, `temperature`, `n`) are unset by
/// default. Responders bind their own equivalents to these paths so that a
/// single assignment such as `prapti.temperature = 0.5` reaches every
/// responder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreConfiguration {
    /// Marks an in-tree configuration document as a containment boundary.
    pub config_root: bool,
    /// Responders should not contact a backend.
    pub dry_run: bool,
    /// Treat warnings as errors when choosing the exit status.
    pub strict: bool,
    /// Model name used by responders that bind to it.
    pub model: Option<String>,
    /// Sampling temperature used by responders that bind to it.
    pub temperature: Option<f64>,
    /// Number of responses requested from responders that bind to it.
    pub n: Option<i64>,
}

impl Configuration for CoreConfiguration {
    fn fields() -> FieldTable<Self> {
        FieldTable::<Self>::new()
            .field(
                "config_root",
                |config| &config.config_root,
                |config| &mut config.config_root,
            )
            .field("dry_run", |config| &config.dry_run, |config| &mut config.dry_run)
            .field("strict", |config| &config.strict, |config| &mut config.strict)
            .field("model", |config| &config.model, |config| &mut config.model)
            .field(
                "temperature",
                |config| &config.temperature,
                |config| &mut config.temperature,
            )
            .field("n", |config| &config.n, |config| &mut config.n)
    }
}
