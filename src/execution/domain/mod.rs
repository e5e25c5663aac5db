//! Domain types for a run.

mod ids;
mod options;
mod state;

pub use ids::RunId;
pub use options::RunOptions;
pub use state::ExecutionState;
