//! Run preparation services.

mod discovery;

pub use discovery::discover_config_dirs;
