//! The command interpretation loop.

mod interpret;

pub use interpret::{interpret_commands, interpret_message_sequence, run_action};
