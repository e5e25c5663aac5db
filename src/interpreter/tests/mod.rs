//! Unit tests for command parsing and interpretation.
//!
//! Tests are organised by concern: the command grammar, config-root
//! detection, and the interpretation loop.

mod config_root_tests;
