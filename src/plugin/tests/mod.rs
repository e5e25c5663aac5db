//! Unit tests for plugins, responders and the core actions.

mod fixtures;
