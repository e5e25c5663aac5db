//! Prapti: command interpretation for markdown conversation documents.
//!
//! A prapti document is a markdown conversation with a generative-text
//! backend. Lines written after a command marker are either configuration
//! assignments (`name = value`) or action invocations (`name args…`). This
//! crate evaluates those commands in document order against a live
//! configuration tree and a registry of plugin-provided actions.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: documents, configuration values, actions and diagnostics
//! - **Ports**: trait interfaces for external collaborators (diagnostics
//!   sinks, configuration document loaders, plugins and responders)
//! - **Adapters**: concrete sink and loader implementations
//! - **Services**: the command interpreter and run orchestration
//!
//! # Modules
//!
//! - [`message`]: messages, commands and source locations
//! - [`diagnostics`]: diagnostic records and reporting sinks
//! - [`config`]: the configuration tree and late-bound variable references
//! - [`action`]: action definitions and name lookup
//! - [`interpreter`]: command parsing and the interpretation loop
//! - [`plugin`]: plugins, responders and the built-in test responder
//! - [`execution`]: the run-scoped execution state

pub mod action;
pub mod config;
pub mod diagnostics;
pub mod execution;
pub mod interpreter;
pub mod message;
pub mod plugin;
