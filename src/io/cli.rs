//! Command-line interface for solving a maze image and exporting its trace

use crate::io::configuration::{
    FINAL_FRAME_DELAY_FACTOR, FRAME_DELAY_MS, HIGHLIGHT_COLOR, MAX_OPEN_FRAME_FILES,
    SEARCH_STACK_SIZE, SOLVED_SUFFIX, TRACE_SUFFIX, UNSOLVED_SUFFIX,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::frames::FrameWriter;
use crate::io::image::{export_image, load_maze, mark_entrance};
use crate::io::progress::ProgressManager;
use crate::io::visualization::export_gif;
use crate::maze::lattice::{Lattice, trim};
use crate::solver::{CancelPolicy, Execution, Solver, SolverConfig};
use crate::trace::sequence::{Animation, FrameObserver};
use clap::Parser;
use image::Rgba;
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mazetrace")]
#[command(
    author,
    version,
    about = "Solve a maze image by concurrent backtracking and animate the exploration"
)]
/// Command-line arguments for the maze solver
pub struct Cli {
    /// Maze image to solve (GIF or any format the image crate decodes)
    #[arg(value_name = "MAZE")]
    pub maze: PathBuf,

    /// Expected number of cell rows
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Expected number of cell columns
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Branch scheduling
    #[arg(short, long, value_enum, default_value_t = Execution::Concurrent)]
    pub mode: Execution,

    /// Sibling cancellation once a solution is found
    #[arg(long, value_enum, default_value_t = CancelPolicy::BestEffort)]
    pub cancel: CancelPolicy,

    /// Maximum moves along one branch (defaults to the number of cells)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Search worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Directory to save every trace frame into as numbered PNGs
    #[arg(short, long, value_name = "DIR")]
    pub frames: Option<PathBuf>,

    /// Maximum number of frame files open at once
    #[arg(long, default_value_t = MAX_OPEN_FRAME_FILES)]
    pub max_open_files: usize,

    /// Display time of each animation frame in milliseconds
    #[arg(long, default_value_t = FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Output directory (defaults to the maze image's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// The image is already cropped to the maze border
    #[arg(long)]
    pub pretrimmed: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Solver parameters selected by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a count argument is zero
    pub fn solver_config(&self) -> Result<SolverConfig> {
        for (parameter, value) in [
            ("rows", self.rows),
            ("cols", self.cols),
            ("max_depth", self.max_depth),
            ("threads", self.threads),
        ] {
            if value == Some(0) {
                return Err(invalid_parameter(parameter, &0, &"must be positive"));
            }
        }

        Ok(SolverConfig {
            execution: self.mode,
            cancel_policy: self.cancel,
            max_depth: self.max_depth,
            threads: self.threads,
            stack_size: SEARCH_STACK_SIZE,
            highlight: HIGHLIGHT_COLOR,
        })
    }
}

/// Files and counters produced by one run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Cells on the solution path
    pub path_length: usize,
    /// Dead-end frames in the trace
    pub dead_ends: usize,
    /// Trimmed maze with the entrance marked
    pub unsolved_path: PathBuf,
    /// Still image of the solution
    pub solved_path: PathBuf,
    /// Animated trace
    pub trace_path: PathBuf,
    /// Individually saved frames, when requested
    pub frame_paths: Vec<PathBuf>,
}

/// Runs the full pipeline for one maze image
pub struct MazeRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load, trim, solve and export
    ///
    /// # Errors
    ///
    /// Returns the first error from loading, classification, search or export. No
    /// output besides the unsolved preview is written when the search fails.
    pub fn run(&mut self) -> Result<RunReport> {
        let config = self.cli.solver_config()?;
        let lattice = self.extract_lattice()?;

        let survey = lattice.survey();
        info!(
            "Lattice {}x{}: {} reachable cells, {} leaves, exit reachable: {}",
            lattice.rows(),
            lattice.columns(),
            survey.reachable,
            survey.leaves,
            survey.exit_reachable
        );
        if !survey.exit_reachable {
            warn!("The exit is not reachable from the entrance");
        }

        let unsolved_path = self.output_path(UNSOLVED_SUFFIX, "png");
        export_image(
            &mark_entrance(lattice.bitmap(), Rgba(HIGHLIGHT_COLOR)),
            &unsolved_path,
        )?;

        let solver = Solver::new(config)?;
        let name = self.display_name();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_search(&name);
        }
        let observer = self
            .progress_manager
            .as_ref()
            .map(|pm| pm as &dyn FrameObserver);
        let result = solver.solve_observed(&lattice, observer);
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_search(match &result {
                Ok(_) => "solved",
                Err(_) => "no solution",
            });
        }
        let solution = result?;

        let frame_paths = match &self.cli.frames {
            Some(directory) => {
                let writer = FrameWriter::new(directory, self.cli.max_open_files)?;
                let bar = self
                    .progress_manager
                    .as_ref()
                    .map(|pm| pm.frame_bar(solution.frames.len()));
                let paths = writer.write_all(&solution.frames, bar.as_ref())?;
                if let Some(bar) = bar {
                    bar.finish();
                }
                paths
            }
            None => Vec::new(),
        };

        let path_length = solution.path.len();
        let dead_ends = solution.stats.dead_ends;
        let animation = Animation::assemble(
            solution.frames,
            &solution.path,
            self.cli.frame_delay,
            self.cli.frame_delay.saturating_mul(FINAL_FRAME_DELAY_FACTOR),
        )?;

        let solved_path = self.output_path(SOLVED_SUFFIX, "png");
        if let Some(last) = animation.last() {
            export_image(&last.image, &solved_path)?;
        }

        let trace_path = self.output_path(TRACE_SUFFIX, "gif");
        export_gif(&animation, &trace_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(RunReport {
            path_length,
            dead_ends,
            unsolved_path,
            solved_path,
            trace_path,
            frame_paths,
        })
    }

    /// Decode, trim and classify the maze image, checking the requested dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, trimmed or classified, or if its
    /// lattice does not match the requested rows and columns
    pub fn extract_lattice(&self) -> Result<Lattice> {
        let raw = load_maze(&self.cli.maze)?;
        let bitmap = if self.cli.pretrimmed {
            raw
        } else {
            trim(&raw)?
        };
        let lattice = Lattice::new(bitmap)?;

        let found = (lattice.rows(), lattice.columns());
        let expected = (
            self.cli.rows.unwrap_or(found.0),
            self.cli.cols.unwrap_or(found.1),
        );
        if expected != found {
            return Err(MazeError::DimensionMismatch { expected, found });
        }

        Ok(lattice)
    }

    /// Output file for `suffix` next to the maze image or in the output directory
    pub fn output_path(&self, suffix: &str, extension: &str) -> PathBuf {
        let stem = self.cli.maze.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        match (&self.cli.output, self.cli.maze.parent()) {
            (Some(directory), _) => directory.join(name),
            (None, Some(parent)) => parent.join(name),
            (None, None) => PathBuf::from(name),
        }
    }

    fn display_name(&self) -> String {
        self.cli
            .maze
            .file_name()
            .map_or_else(
                || self.cli.maze.display().to_string(),
                |name| name.to_string_lossy().to_string(),
            )
    }

    /// The maze image being solved
    pub fn maze_path(&self) -> &Path {
        &self.cli.maze
    }
}
