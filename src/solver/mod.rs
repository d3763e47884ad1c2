//! Concurrent backtracking search over the maze lattice

/// Per-run configuration, cancellation and frame collection
pub mod context;
/// Task-tree exploration and the solver entry point
pub mod coordinator;
/// Per-branch history and candidate directions
pub mod state;

pub use context::{CancelPolicy, Execution, SearchContext, SolverConfig};
pub use coordinator::{Outcome, SearchStats, Solution, Solver};
pub use state::SearchState;
