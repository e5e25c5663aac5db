//! Command grammar, command errors and config-root detection.

mod config_root;
mod error;
mod parser;

pub use config_root::is_config_root;
pub use error::CommandError;
pub use parser::{CommandParseError, ParsedCommand, is_name_char};
