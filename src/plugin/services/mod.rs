//! Plugin loading, responder management and the core actions.

mod core_actions;
mod lifecycle;

pub use core_actions::install_core;
pub use lifecycle::{
    create_responder, generate_responses, load_available_plugin, load_plugin, select_responder,
};
