//! Domain types for the configuration tree.

mod core_config;
mod error;
mod kind;
mod root;
mod schema;
mod section;
mod value;
mod var_ref;

pub use core_config::{CORE_NAMESPACE, CoreConfiguration, RESPONDERS_NAMESPACE};
pub use error::{ConfigError, ConversionError};
pub use kind::FieldKind;
pub use root::{AssignedField, RootConfiguration};
pub use schema::{Configuration, FieldTable};
pub use section::{ConfigSection, TypedSection};
pub use value::{FieldType, FieldValue};
pub use var_ref::{VarBinding, VarRef, resolve_var_refs};
