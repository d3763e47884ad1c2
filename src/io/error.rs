//! Error types and context management for maze solving operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Failed to load the maze image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The bitmap holds a single uniform color, so walls cannot be told apart from open space
    UnclassifiableImage {
        /// Bitmap width in pixels
        width: u32,
        /// Bitmap height in pixels
        height: u32,
    },

    /// The bitmap has no drawn maze boundary or is too small to hold a cell
    MalformedBitmap {
        /// Description of what is wrong with the bitmap
        reason: String,
    },

    /// Every branch of the search tree ended without reaching the exit
    NoSolutionFound {
        /// Number of dead ends explored before giving up
        dead_ends: usize,
    },

    /// The depth guard cut branches short and no other branch reached the exit
    DepthLimitExceeded {
        /// Maximum search depth in cells
        limit: usize,
        /// Number of branches that were cut short
        truncated: usize,
    },

    /// The decoded lattice does not match the requested maze dimensions
    DimensionMismatch {
        /// Requested (rows, columns)
        expected: (usize, usize),
        /// Decoded (rows, columns)
        found: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A worker pool could not be started
    WorkerPool {
        /// Underlying pool construction error
        source: rayon::ThreadPoolBuildError,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::UnclassifiableImage { width, height } => {
                write!(
                    f,
                    "Unclassifiable image: the {width}x{height} bitmap contains a single color"
                )
            }
            Self::MalformedBitmap { reason } => {
                write!(f, "Malformed bitmap: {reason}")
            }
            Self::NoSolutionFound { dead_ends } => {
                write!(
                    f,
                    "No solution found after exploring {dead_ends} dead ends"
                )
            }
            Self::DepthLimitExceeded { limit, truncated } => {
                write!(
                    f,
                    "No solution found within depth limit {limit} ({truncated} branches truncated)"
                )
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Maze dimensions mismatch: expected {}x{} cells, decoded {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WorkerPool { source } => {
                write!(f, "Failed to start worker pool: {source}")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::WorkerPool { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Attaches the file being worked on to I/O and image errors
pub trait WithContext<T> {
    /// Record the path and operation on path-carrying error variants
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<MazeError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            MazeError::ImageLoad { source, .. } => MazeError::ImageLoad {
                path: path.to_path_buf(),
                source,
            },
            MazeError::ImageExport { source, .. } => MazeError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            MazeError::FileSystem { source, .. } => MazeError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for MazeError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed bitmap error
pub fn malformed_bitmap(reason: &impl ToString) -> MazeError {
    MazeError::MalformedBitmap {
        reason: reason.to_string(),
    }
}

