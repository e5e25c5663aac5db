//! Plugin capability flags.

use serde::{Deserialize, Serialize};

/// What a plugin contributes when loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginCapabilities {
    actions: bool,
    responder: bool,
}

impl PluginCapabilities {
    /// The plugin contributes nothing beyond its configuration.
    pub const NONE: Self = Self::new(false, false);
    /// The plugin registers actions.
    pub const ACTIONS: Self = Self::new(true, false);
    /// The plugin constructs responders.
    pub const RESPONDER: Self = Self::new(false, true);

    /// Creates capabilities from the two flags.
    #[must_use]
    pub const fn new(actions: bool, responder: bool) -> Self {
        Self { actions, responder }
    }

    /// Combines two sets of capabilities.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(
            self.actions || other.actions,
            self.responder || other.responder,
        )
    }

    /// Returns whether the plugin registers actions.
    #[must_use]
    pub const fn provides_actions(self) -> bool {
        self.actions
    }

    /// Returns whether the plugin constructs responders.
    #[must_use]
    pub const fn provides_responder(self) -> bool {
        self.responder
    }
}
