//! Plugin capabilities, responder registrations and errors.

mod capabilities;
mod error;
mod responder;

pub use capabilities::PluginCapabilities;
pub use error::PluginError;
pub use responder::{RegisteredResponder, ResponderContext, responder_namespace};
