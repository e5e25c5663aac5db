//! Unit tests for the configuration tree.
//!
//! Tests are organised by concern: value conversion, path resolution and
//! assignment on the root tree, and late-bound reference resolution.
