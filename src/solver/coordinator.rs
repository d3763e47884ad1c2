//! Backtracking search over the maze lattice
//!
//! Every visited cell is one task. A task whose cell opens onto the exit reports
//! `Solved`; a task with no candidate directions reports a dead end. Both render their
//! history into the run's frame sink before returning. Any other task forks one child per
//! candidate direction, waits for all of them and reports the first solution a child
//! reported, or `Exhausted` when none did.

use crate::io::error::{MazeError, Result};
use crate::maze::lattice::{Lattice, Position};
use crate::solver::context::{CancelPolicy, Execution, SearchContext, SolverConfig};
use crate::solver::state::SearchState;
use crate::trace::sequence::{FrameKind, FrameObserver, TraceFrame};
use image::Rgba;
use log::{debug, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Terminal result of exploring one search state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The branch reached the exit along this path
    Solved(Vec<Position>),
    /// The branch ran out of moves
    DeadEnd,
    /// Every child branch finished without a solution
    Exhausted,
    /// The run was cancelled before this branch could finish
    Cancelled,
    /// The branch hit the depth bound
    Truncated,
}

impl Outcome {
    /// Test whether this outcome carries a solution
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Counters describing a finished search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Dead-end frames emitted
    pub dead_ends: usize,
    /// Solution frames emitted
    pub solutions: usize,
    /// Branches cut short by the depth bound
    pub truncated: usize,
    /// Wall-clock search time
    pub elapsed: Duration,
}

impl SearchStats {
    fn from_frames(frames: &[TraceFrame], truncated: usize, elapsed: Duration) -> Self {
        let solutions = frames
            .iter()
            .filter(|frame| frame.kind == FrameKind::Solution)
            .count();

        Self {
            dead_ends: frames.len() - solutions,
            solutions,
            truncated,
            elapsed,
        }
    }
}

/// A path from entrance to exit together with the frames of every explored branch
#[derive(Clone, Debug)]
pub struct Solution {
    /// Cell centers from the entrance to the exit cell
    pub path: Vec<Position>,
    /// Terminal frames in completion order
    pub frames: Vec<TraceFrame>,
    /// Search counters
    pub stats: SearchStats,
}

/// Decide a state's outcome without forking, if it is terminal
///
/// Cancellation is checked first so cancelled runs stop before rendering or forking.
pub fn settle(ctx: &SearchContext<'_>, state: &SearchState) -> Option<Outcome> {
    if ctx.is_cancelled() {
        return Some(Outcome::Cancelled);
    }

    if state.is_exit() {
        ctx.emit(FrameKind::Solution, state);
        if ctx.policy() == CancelPolicy::Eager {
            ctx.cancel();
        }
        debug!("Exit reached after {} moves", state.depth());
        return Some(Outcome::Solved(state.history().to_vec()));
    }

    if state.candidates().is_empty() {
        ctx.emit(FrameKind::DeadEnd, state);
        return Some(Outcome::DeadEnd);
    }

    if state.depth() >= ctx.max_depth() {
        ctx.record_truncation();
        warn!(
            "Branch at {:?} truncated at depth {}",
            state.current(),
            ctx.max_depth()
        );
        return Some(Outcome::Truncated);
    }

    None
}

fn unsolved(ctx: &SearchContext<'_>) -> Outcome {
    if ctx.is_cancelled() {
        Outcome::Cancelled
    } else {
        Outcome::Exhausted
    }
}

/// Explore a state with one rayon task per candidate direction
///
/// Children record their solution in a slot owned by this call; the first child to
/// report wins and later solutions are dropped.
pub fn explore_concurrent(ctx: &SearchContext<'_>, mut state: SearchState) -> Outcome {
    if let Some(outcome) = settle(ctx, &state) {
        return outcome;
    }

    let first_solved = OnceLock::new();
    rayon::scope(|scope| {
        while let Some(direction) = state.take_candidate() {
            let child = state.advance(direction);
            let first_solved = &first_solved;
            scope.spawn(move |_| {
                if let Outcome::Solved(path) = explore_concurrent(ctx, child) {
                    if first_solved.set(path).is_err() {
                        debug!("Sibling solution discarded, an earlier one was reported");
                    }
                }
            });
        }
    });

    first_solved
        .into_inner()
        .map_or_else(|| unsolved(ctx), Outcome::Solved)
}

/// Explore a state depth-first on the calling thread
pub fn explore_sequential(ctx: &SearchContext<'_>, mut state: SearchState) -> Outcome {
    if let Some(outcome) = settle(ctx, &state) {
        return outcome;
    }

    let mut solved = None;
    while let Some(direction) = state.take_candidate() {
        if let Outcome::Solved(path) = explore_sequential(ctx, state.advance(direction)) {
            if solved.is_none() {
                solved = Some(path);
            }
            if ctx.policy() == CancelPolicy::Eager {
                break;
            }
        }
    }

    solved.map_or_else(|| unsolved(ctx), Outcome::Solved)
}

/// Runs searches on a dedicated worker pool
pub struct Solver {
    config: SolverConfig,
    pool: ThreadPool,
}

impl Solver {
    /// Create a solver and start its worker pool
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be started
    pub fn new(config: SolverConfig) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new()
            .stack_size(config.stack_size)
            .thread_name(|index| format!("mazetrace-search-{index}"));

        builder = match (config.execution, config.threads) {
            (Execution::Sequential, _) => builder.num_threads(1),
            (Execution::Concurrent, Some(threads)) => builder.num_threads(threads),
            (Execution::Concurrent, None) => builder,
        };

        Ok(Self {
            config,
            pool: builder.build()?,
        })
    }

    /// Runtime parameters of this solver
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search the lattice for a path from the entrance to the exit
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NoSolutionFound`] when every branch dead-ends, or
    /// [`MazeError::DepthLimitExceeded`] when branches were cut short and none solved
    pub fn solve(&self, lattice: &Lattice) -> Result<Solution> {
        self.solve_observed(lattice, None)
    }

    /// Search the lattice, reporting each emitted frame to `observer`
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NoSolutionFound`] when every branch dead-ends, or
    /// [`MazeError::DepthLimitExceeded`] when branches were cut short and none solved
    pub fn solve_observed(
        &self,
        lattice: &Lattice,
        observer: Option<&dyn FrameObserver>,
    ) -> Result<Solution> {
        let max_depth = self
            .config
            .max_depth
            .unwrap_or_else(|| lattice.cell_count().max(1));
        let ctx = SearchContext::new(
            self.config.cancel_policy,
            max_depth,
            Rgba(self.config.highlight),
            observer,
        );
        let root = SearchState::entrance(lattice);

        info!(
            "Searching {}x{} maze ({:?}, {:?}, depth limit {max_depth})",
            lattice.rows(),
            lattice.columns(),
            self.config.execution,
            self.config.cancel_policy
        );

        let start_time = Instant::now();
        let outcome = self.pool.install(|| match self.config.execution {
            Execution::Concurrent => explore_concurrent(&ctx, root),
            Execution::Sequential => explore_sequential(&ctx, root),
        });

        let truncated = ctx.truncated();
        let frames = ctx.into_frames();
        let stats = SearchStats::from_frames(&frames, truncated, start_time.elapsed());

        match outcome {
            Outcome::Solved(path) => {
                info!(
                    "Solved in {:?}: path of {} cells, {} dead ends",
                    stats.elapsed,
                    path.len(),
                    stats.dead_ends
                );
                Ok(Solution {
                    path,
                    frames,
                    stats,
                })
            }
            _ if truncated > 0 => Err(MazeError::DepthLimitExceeded {
                limit: max_depth,
                truncated,
            }),
            _ => Err(MazeError::NoSolutionFound {
                dead_ends: stats.dead_ends,
            }),
        }
    }
}
