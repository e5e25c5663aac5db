//! Action definitions, the action registry and invocation context.

mod action;
mod context;
mod error;
mod registry;

pub use action::{Action, ActionFn};
pub use context::ActionContext;
pub use error::{ActionError, DispatchError};
pub use registry::ActionRegistry;
