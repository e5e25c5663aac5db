//! The configuration tree.
//!
//! Configuration is split into namespaces: the core namespace `prapti`, one
//! namespace per loaded plugin (keyed by the plugin name) and one per
//! responder (`responders.<name>`). Each namespace holds a statically typed
//! record whose fields are reachable by name through a field table built once
//! at registration.
//!
//! Documents assign fields with dotted paths (`prapti.temperature = 0.5`).
//! Plugins may declare late-bound references ([`domain::VarRef`]) so that a
//! local field reads its effective value from a root path whenever that path
//! has been explicitly assigned.
//!
//! # Example
//!
//! ```
//! use prapti::config::domain::{FieldValue, RootConfiguration};
//!
//! let mut root = RootConfiguration::new();
//! root.assign("prapti.temperature", "0.5").expect("field exists");
//!
//! assert_eq!(root.core().temperature, Some(0.5));
//! assert!(root.is_assigned("prapti.temperature"));
//! assert_eq!(root.get("prapti.dry_run"), Some(FieldValue::Bool(false)));
//! ```

pub mod domain;

#[cfg(test)]
mod tests;
