//! Throttled saving of individual trace frames

use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::image::export_image;
use crate::trace::sequence::TraceFrame;
use indicatif::ProgressBar;
use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::path::{Path, PathBuf};

/// Saves trace frames as numbered PNG files with a cap on concurrently open files
///
/// The cap is enforced by the size of a private worker pool, independent of the pool
/// the search runs on.
pub struct FrameWriter {
    directory: PathBuf,
    max_open_files: usize,
    pool: ThreadPool,
}

impl FrameWriter {
    /// Create a writer for `directory` with at most `max_open_files` files open at once
    ///
    /// # Errors
    ///
    /// Returns an error if `max_open_files` is zero or the worker pool cannot start
    pub fn new(directory: &Path, max_open_files: usize) -> Result<Self> {
        if max_open_files == 0 {
            return Err(invalid_parameter(
                "max_open_files",
                &max_open_files,
                &"at least one file must be writable",
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(max_open_files)
            .thread_name(|index| format!("mazetrace-writer-{index}"))
            .build()?;

        Ok(Self {
            directory: directory.to_path_buf(),
            max_open_files,
            pool,
        })
    }

    /// Output directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Maximum number of files open at once
    pub const fn max_open_files(&self) -> usize {
        self.max_open_files
    }

    /// File path for the frame at `index` in completion order
    pub fn frame_path(&self, index: usize, frame: &TraceFrame) -> PathBuf {
        self.directory
            .join(format!("frame_{index:05}_{}.png", frame.kind.label()))
    }

    /// Write every frame, returning the paths in the same order
    ///
    /// # Errors
    ///
    /// Returns the first error encountered creating the directory or saving a frame
    pub fn write_all(
        &self,
        frames: &[TraceFrame],
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.directory)
            .with_path(&self.directory, "create directory")?;

        let paths = self.pool.install(|| {
            frames
                .par_iter()
                .enumerate()
                .map(|(index, frame)| {
                    let path = self.frame_path(index, frame);
                    export_image(&frame.image, &path)?;
                    debug!("Saved {}", path.display());
                    if let Some(bar) = progress {
                        bar.inc(1);
                    }
                    Ok(path)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        info!(
            "Saved {} frames to {}",
            paths.len(),
            self.directory.display()
        );
        Ok(paths)
    }
}
