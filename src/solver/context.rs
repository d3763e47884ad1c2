//! Per-run search configuration and shared coordination state

use crate::io::configuration::{HIGHLIGHT_COLOR, SEARCH_STACK_SIZE};
use crate::solver::state::SearchState;
use crate::trace::render::render;
use crate::trace::sequence::{FrameKind, FrameObserver, FrameSink, TraceFrame};
use clap::ValueEnum;
use image::Rgba;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// How branches of the search tree are scheduled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Execution {
    /// Every candidate direction is explored by its own task on the worker pool
    #[default]
    Concurrent,
    /// Depth-first on a single thread, candidates in order
    Sequential,
}

/// What happens to sibling branches once a solution is found
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CancelPolicy {
    /// Siblings run to completion, so every dead end is rendered
    #[default]
    BestEffort,
    /// Siblings stop before forking further, leaving the frame count scheduling dependent
    Eager,
}

/// Runtime parameters of a solver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Branch scheduling
    pub execution: Execution,
    /// Sibling cancellation once solved
    pub cancel_policy: CancelPolicy,
    /// Maximum moves along one branch; defaults to the lattice's cell count
    pub max_depth: Option<usize>,
    /// Worker threads for concurrent execution; defaults to rayon's choice
    pub threads: Option<usize>,
    /// Stack size in bytes of each worker thread
    pub stack_size: usize,
    /// Color of explored corridors in rendered frames
    pub highlight: [u8; 4],
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            execution: Execution::default(),
            cancel_policy: CancelPolicy::default(),
            max_depth: None,
            threads: None,
            stack_size: SEARCH_STACK_SIZE,
            highlight: HIGHLIGHT_COLOR,
        }
    }
}

/// State shared by every task of one solving run
///
/// Holds the cancellation signal, the depth bound and the frame sink. Nothing here is
/// global, so concurrent runs never observe each other.
pub struct SearchContext<'a> {
    policy: CancelPolicy,
    max_depth: usize,
    highlight: Rgba<u8>,
    cancelled: AtomicBool,
    truncated: AtomicUsize,
    sink: FrameSink<'a>,
}

impl<'a> SearchContext<'a> {
    /// Create the context for one run
    pub fn new(
        policy: CancelPolicy,
        max_depth: usize,
        highlight: Rgba<u8>,
        observer: Option<&'a dyn FrameObserver>,
    ) -> Self {
        Self {
            policy,
            max_depth,
            highlight,
            cancelled: AtomicBool::new(false),
            truncated: AtomicUsize::new(0),
            sink: FrameSink::new(observer),
        }
    }

    /// Sibling cancellation policy
    pub const fn policy(&self) -> CancelPolicy {
        self.policy
    }

    /// Maximum moves along one branch
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Test whether tasks should stop forking
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Signal every task to stop forking
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Count a branch cut short by the depth bound
    pub fn record_truncation(&self) {
        self.truncated.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of branches cut short by the depth bound
    pub fn truncated(&self) -> usize {
        self.truncated.load(Ordering::Relaxed)
    }

    /// Render the state's history and record it as a terminal frame
    pub fn emit(&self, kind: FrameKind, state: &SearchState) -> usize {
        let image = render(state.bitmap(), state.history(), self.highlight);
        self.sink.push(TraceFrame {
            kind,
            history: state.history().to_vec(),
            image,
        })
    }

    /// Number of frames emitted so far
    pub fn frames_emitted(&self) -> usize {
        self.sink.len()
    }

    /// Consume the context, returning frames in completion order
    pub fn into_frames(self) -> Vec<TraceFrame> {
        self.sink.into_frames()
    }
}
