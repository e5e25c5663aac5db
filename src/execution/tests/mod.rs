//! Unit tests for run options, execution state and configuration discovery.

mod discovery_tests;
