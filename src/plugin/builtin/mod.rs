//! Plugins shipped with the core.

use std::sync::Arc;

use crate::plugin::ports::Plugin;

pub mod test_responder;

pub use test_responder::{
    TestResponder, TestResponderConfiguration, TestResponderPlugin,
    TestResponderPluginConfiguration,
};

/// Returns one instance of every built-in plugin.
#[must_use]
pub fn builtin_plugins() -> Vec<Arc<dyn Plugin>> {
    vec![Arc::new(TestResponderPlugin)]
}
