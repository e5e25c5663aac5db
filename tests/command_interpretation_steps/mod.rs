//! Step definitions for command interpretation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
