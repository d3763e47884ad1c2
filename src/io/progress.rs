//! Terminal progress display for searching and frame saving

use crate::io::configuration::SPINNER_TICK_MS;
use crate::trace::sequence::{FrameKind, FrameObserver};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static WRITE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Frames: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Manages the spinner shown while searching and the bar shown while saving frames
pub struct ProgressManager {
    multi_progress: MultiProgress,
    search_bar: Option<ProgressBar>,
    dead_ends: AtomicUsize,
    solutions: AtomicUsize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active displays
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            search_bar: None,
            dead_ends: AtomicUsize::new(0),
            solutions: AtomicUsize::new(0),
        }
    }

    /// Show the search spinner labelled with the maze name
    pub fn start_search(&mut self, name: &str) {
        let spinner = self.multi_progress.add(ProgressBar::new_spinner());
        spinner.set_style(SEARCH_STYLE.clone());
        spinner.set_prefix(name.to_string());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        self.dead_ends.store(0, Ordering::Relaxed);
        self.solutions.store(0, Ordering::Relaxed);
        self.search_bar = Some(spinner);
    }

    /// Stop the search spinner, leaving a final message
    pub fn finish_search(&mut self, message: &str) {
        if let Some(spinner) = self.search_bar.take() {
            spinner.finish_with_message(message.to_string());
        }
    }

    /// Frames counted so far as `(dead ends, solutions)`
    pub fn counts(&self) -> (usize, usize) {
        (
            self.dead_ends.load(Ordering::Relaxed),
            self.solutions.load(Ordering::Relaxed),
        )
    }

    /// Create a bar for saving `frame_count` frames
    pub fn frame_bar(&self, frame_count: usize) -> ProgressBar {
        let bar = self
            .multi_progress
            .add(ProgressBar::new(frame_count as u64));
        bar.set_style(WRITE_STYLE.clone());
        bar
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}

impl FrameObserver for ProgressManager {
    fn frame_emitted(&self, kind: FrameKind, total: usize) {
        match kind {
            FrameKind::DeadEnd => self.dead_ends.fetch_add(1, Ordering::Relaxed),
            FrameKind::Solution => self.solutions.fetch_add(1, Ordering::Relaxed),
        };

        if let Some(ref spinner) = self.search_bar {
            let (dead_ends, solutions) = self.counts();
            spinner.set_message(format!(
                "{total} frames ({dead_ends} dead ends, {solutions} solutions)"
            ));
        }
    }
}
